//! Person filtering over markup documents.
//!
//! Records whose numbers or dates cannot be read are skipped one by one.
//! A document that cannot be read at all surfaces as a [`MarkupError`]
//! from [`filter_people`], and as the canonical empty result from
//! [`filter_people_xml`].

mod parser;
pub mod source;
mod summary;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use parser::PersonRecord;
pub use source::{FieldMap, PersonSource, XmlPersonSource};
pub use summary::PeopleSummary;

#[derive(Debug)]
pub enum MarkupError {
    Parse(roxmltree::Error),
    Overflow { statistic: &'static str },
}

impl std::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupError::Parse(err) => write!(f, "malformed person markup: {}", err),
            MarkupError::Overflow { statistic } => {
                write!(f, "{statistic} does not fit in a 32-bit integer")
            }
        }
    }
}

impl std::error::Error for MarkupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarkupError::Parse(err) => Some(err),
            MarkupError::Overflow { .. } => None,
        }
    }
}

impl From<roxmltree::Error> for MarkupError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Parse(err)
    }
}

/// Thresholds a person must satisfy, all at once, to be reported.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonCriteria {
    /// Exclusive lower bound.
    pub age_above: i32,
    pub department: String,
    /// Exclusive lower bound.
    pub salary_above: Decimal,
    /// Exclusive upper bound on the hire year.
    pub hired_before_year: i32,
}

impl Default for PersonCriteria {
    fn default() -> Self {
        Self {
            age_above: 30,
            department: "IT".to_string(),
            salary_above: Decimal::from(5000),
            hired_before_year: 2019,
        }
    }
}

impl PersonCriteria {
    fn age_qualifies(&self, person: &PersonRecord) -> bool {
        person.age > self.age_above
    }

    fn department_matches(&self, person: &PersonRecord) -> bool {
        person.department == self.department
    }

    fn salary_qualifies(&self, person: &PersonRecord) -> bool {
        person.salary > self.salary_above
    }

    fn hired_in_window(&self, person: &PersonRecord) -> bool {
        person.hire_date.year() < self.hired_before_year
    }

    pub(crate) fn matches(&self, person: &PersonRecord) -> bool {
        self.age_qualifies(person)
            && self.department_matches(person)
            && self.salary_qualifies(person)
            && self.hired_in_window(person)
    }
}

pub fn filter_people<S>(
    source: &S,
    document: &str,
    criteria: &PersonCriteria,
) -> Result<PeopleSummary, MarkupError>
where
    S: PersonSource + ?Sized,
{
    let records = source.records(document)?;
    let total = records.len();

    let parsed: Vec<PersonRecord> = records
        .iter()
        .filter_map(PersonRecord::from_fields)
        .collect();
    if parsed.len() < total {
        debug!(
            dropped = total - parsed.len(),
            "skipped person records with unreadable fields"
        );
    }

    let matches: Vec<(String, Decimal)> = parsed
        .into_iter()
        .filter(|person| criteria.matches(person))
        .map(|person| (person.name, person.salary))
        .collect();

    debug!(total, matched = matches.len(), "filtered person records");
    PeopleSummary::from_matches(matches)
}

/// Like [`filter_people`], but any failure becomes the canonical empty result,
/// indistinguishable from "nobody matched".
pub fn filter_people_or_empty<S>(source: &S, document: &str, criteria: &PersonCriteria) -> PeopleSummary
where
    S: PersonSource + ?Sized,
{
    match filter_people(source, document, criteria) {
        Ok(summary) => summary,
        Err(err) => {
            warn!(error = %err, "person markup rejected; returning empty result");
            PeopleSummary::default()
        }
    }
}

/// Filters `<Person>` elements with the default criteria and renders compact JSON.
pub fn filter_people_xml(xml: &str) -> String {
    filter_people_or_empty(&XmlPersonSource::default(), xml, &PersonCriteria::default()).to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedSource(Vec<FieldMap>);

    impl PersonSource for FixedSource {
        fn records(&self, _document: &str) -> Result<Vec<FieldMap>, MarkupError> {
            Ok(self.0.clone())
        }
    }

    fn record(name: &str, age: &str, department: &str, salary: &str, hired: &str) -> FieldMap {
        HashMap::from([
            ("Name".to_string(), name.to_string()),
            ("Age".to_string(), age.to_string()),
            ("Department".to_string(), department.to_string()),
            ("Salary".to_string(), salary.to_string()),
            ("HireDate".to_string(), hired.to_string()),
        ])
    }

    #[test]
    fn thresholds_are_strict() {
        let source = FixedSource(vec![
            record("Age30", "30", "IT", "6000", "2018-01-01"),
            record("Pay5000", "35", "IT", "5000", "2018-01-01"),
            record("Hired2019", "35", "IT", "6000", "2019-01-01"),
            record("Lowercase", "35", "it", "6000", "2018-01-01"),
            record("Kept", "31", "IT", "5000.01", "2018-12-31"),
        ]);
        let summary =
            filter_people(&source, "", &PersonCriteria::default()).expect("filter succeeds");
        assert_eq!(summary.names, vec!["Kept"]);
        assert_eq!(summary.total_salary, 5000);
    }

    #[test]
    fn criteria_can_be_relaxed() {
        let source = FixedSource(vec![record("Ann", "25", "HR", "4000", "2021-01-01")]);
        let criteria = PersonCriteria {
            age_above: 20,
            department: "HR".to_string(),
            salary_above: Decimal::from(3000),
            hired_before_year: 2022,
        };
        let summary = filter_people(&source, "", &criteria).expect("filter succeeds");
        assert_eq!(summary.count, 1);
    }

    #[test]
    fn parse_failure_is_observable_internally() {
        let error = filter_people(
            &XmlPersonSource::default(),
            "<People><Person>",
            &PersonCriteria::default(),
        )
        .expect_err("malformed document");
        assert!(matches!(error, MarkupError::Parse(_)));
    }

    #[test]
    fn overflow_collapses_to_empty_at_the_boundary() {
        let xml = "<People>\
            <Person><Name>A</Name><Age>40</Age><Department>IT</Department><Salary>2000000000</Salary><HireDate>2015-01-01</HireDate></Person>\
            <Person><Name>B</Name><Age>40</Age><Department>IT</Department><Salary>2000000000</Salary><HireDate>2015-01-01</HireDate></Person>\
            </People>";
        assert_eq!(filter_people_xml(xml), summary::EMPTY_SUMMARY_JSON);
    }
}
