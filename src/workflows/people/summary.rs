use super::MarkupError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

pub(crate) const EMPTY_SUMMARY_JSON: &str =
    r#"{"Names":[],"TotalSalary":0,"AverageSalary":0,"MaxSalary":0,"Count":0}"#;

/// Statistics over the people that passed the filter. Salaries are truncated
/// toward zero; the default value is the canonical empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeopleSummary {
    pub names: Vec<String>,
    pub total_salary: i32,
    pub average_salary: i32,
    pub max_salary: i32,
    pub count: usize,
}

impl PeopleSummary {
    pub(crate) fn from_matches(mut matches: Vec<(String, Decimal)>) -> Result<Self, MarkupError> {
        if matches.is_empty() {
            return Ok(Self::default());
        }

        matches.sort_by(|(left, _), (right, _)| left.cmp(right));

        let count = matches.len();
        let total = matches
            .iter()
            .try_fold(Decimal::ZERO, |sum, (_, salary)| sum.checked_add(*salary))
            .ok_or(MarkupError::Overflow {
                statistic: "TotalSalary",
            })?;
        let average = total
            .checked_div(Decimal::from(count))
            .ok_or(MarkupError::Overflow {
                statistic: "AverageSalary",
            })?;
        let max = matches
            .iter()
            .map(|(_, salary)| *salary)
            .max()
            .unwrap_or(Decimal::ZERO);

        Ok(Self {
            total_salary: truncate(total, "TotalSalary")?,
            average_salary: truncate(average, "AverageSalary")?,
            max_salary: truncate(max, "MaxSalary")?,
            names: matches.into_iter().map(|(name, _)| name).collect(),
            count,
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            error!(error = %err, "people summary could not be serialized");
            EMPTY_SUMMARY_JSON.to_string()
        })
    }
}

fn truncate(value: Decimal, statistic: &'static str) -> Result<i32, MarkupError> {
    value
        .trunc()
        .to_i32()
        .ok_or(MarkupError::Overflow { statistic })
}
