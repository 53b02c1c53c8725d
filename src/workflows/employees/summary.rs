use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

const EMPTY_SUMMARY_JSON: &str = r#"{"Names":[],"TotalSalary":0,"AverageSalary":0,"MinSalary":0,"MaxSalary":0,"Count":0}"#;

/// Statistics over the employees that passed the filter.
///
/// Decimal fields are written as JSON numbers with their exact decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeSummary {
    pub names: Vec<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_salary: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub average_salary: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub min_salary: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub max_salary: Decimal,
    pub count: usize,
}

impl EmployeeSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            error!(error = %err, "employee summary could not be serialized");
            EMPTY_SUMMARY_JSON.to_string()
        })
    }
}
