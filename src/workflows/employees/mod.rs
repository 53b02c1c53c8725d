//! Employee roster filtering.
//!
//! Keeps employees inside an age band, an allow-listed department, a salary
//! band and hired after a cutoff date, then reports the surviving names and
//! salary statistics.

pub mod loader;
mod summary;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::ops::RangeInclusive;
use tracing::debug;

pub use loader::{read_employees, read_employees_from_path, LoadError};
pub use summary::EmployeeSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub age: i32,
    pub department: String,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

/// Thresholds an employee must satisfy, all at once, to be reported.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeCriteria {
    pub age: RangeInclusive<i32>,
    pub departments: Vec<String>,
    pub salary: RangeInclusive<Decimal>,
    /// Exclusive lower bound on the hire date.
    pub hired_after: NaiveDate,
}

impl Default for EmployeeCriteria {
    fn default() -> Self {
        Self {
            age: 25..=40,
            departments: vec!["IT".to_string(), "Finance".to_string()],
            salary: Decimal::from(5000)..=Decimal::from(9000),
            hired_after: NaiveDate::from_ymd_opt(2016, 12, 31).unwrap_or(NaiveDate::MIN),
        }
    }
}

impl EmployeeCriteria {
    pub fn age_in_range(&self, employee: &Employee) -> bool {
        self.age.contains(&employee.age)
    }

    pub fn department_allowed(&self, employee: &Employee) -> bool {
        self.departments
            .iter()
            .any(|department| *department == employee.department)
    }

    pub fn salary_in_range(&self, employee: &Employee) -> bool {
        self.salary.contains(&employee.salary)
    }

    pub fn hired_in_window(&self, employee: &Employee) -> bool {
        employee.hire_date > self.hired_after
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.age_in_range(employee)
            && self.department_allowed(employee)
            && self.salary_in_range(employee)
            && self.hired_in_window(employee)
    }
}

pub fn filter_employees(employees: &[Employee], criteria: &EmployeeCriteria) -> EmployeeSummary {
    let matched: Vec<&Employee> = employees
        .iter()
        .filter(|employee| criteria.matches(employee))
        .collect();

    debug!(
        total = employees.len(),
        matched = matched.len(),
        "filtered employee records"
    );

    if matched.is_empty() {
        return EmployeeSummary::default();
    }

    let mut names: Vec<String> = matched.iter().map(|employee| employee.name.clone()).collect();
    names.sort_by(|left, right| by_length_then_ordinal(left, right));

    let salaries = || matched.iter().map(|employee| employee.salary);
    let count = matched.len();
    let total_salary: Decimal = salaries().sum();
    let average_salary = (total_salary / Decimal::from(count)).round_dp(2);

    EmployeeSummary {
        names,
        total_salary,
        average_salary,
        min_salary: salaries().min().unwrap_or(Decimal::ZERO),
        max_salary: salaries().max().unwrap_or(Decimal::ZERO),
        count,
    }
}

/// Applies the default criteria and renders the summary as compact JSON.
pub fn filter_employees_json(employees: &[Employee]) -> String {
    filter_employees(employees, &EmployeeCriteria::default()).to_json()
}

/// Longer names first; equal lengths fall back to ordinal order.
/// Length is in `char`s, not UTF-16 units; names outside the BMP count once.
fn by_length_then_ordinal(left: &str, right: &str) -> Ordering {
    right
        .chars()
        .count()
        .cmp(&left.chars().count())
        .then_with(|| left.cmp(right))
}
