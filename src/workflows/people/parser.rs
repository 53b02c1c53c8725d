use super::source::FieldMap;
use crate::workflows::dates::parse_calendar_date;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PersonRecord {
    pub(crate) name: String,
    pub(crate) age: i32,
    pub(crate) department: String,
    pub(crate) salary: Decimal,
    pub(crate) hire_date: NaiveDate,
}

impl PersonRecord {
    /// `None` when Age, Salary or HireDate cannot be read. A missing Age or
    /// Salary element reads as `0`.
    pub(crate) fn from_fields(fields: &FieldMap) -> Option<Self> {
        let field = |name: &str, fallback: &'static str| {
            fields.get(name).map(String::as_str).unwrap_or(fallback)
        };

        let age = parse_age(field("Age", "0"))?;
        let salary = parse_salary(field("Salary", "0"))?;
        let hire_date = parse_calendar_date(field("HireDate", ""))?;

        Some(Self {
            name: field("Name", "").to_string(),
            age,
            department: field("Department", "").to_string(),
            salary,
            hire_date,
        })
    }
}

fn parse_age(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Group separators are dropped before parsing, so `12,500.75` reads as 12500.75.
/// Underscore digit separators are not salary text.
fn parse_salary(value: &str) -> Option<Decimal> {
    if value.contains('_') {
        return None;
    }
    let digits: String = value.trim().chars().filter(|ch| *ch != ',').collect();
    Decimal::from_str(&digits).ok()
}
