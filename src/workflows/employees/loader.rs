use super::Employee;
use crate::workflows::dates::parse_calendar_date;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read employee export: {}", err),
            LoadError::Csv(err) => write!(f, "invalid employee CSV data: {}", err),
            LoadError::InvalidField { row, field, value } => {
                write!(f, "row {row}: could not read {field} from '{value}'")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Csv(err) => Some(err),
            LoadError::InvalidField { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub fn read_employees_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Employee>, LoadError> {
    let file = std::fs::File::open(path)?;
    read_employees(file)
}

/// Reads `Name,Age,Department,Salary,HireDate` rows. Rows are numbered from 1,
/// not counting the header.
pub fn read_employees<R: Read>(reader: R) -> Result<Vec<Employee>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut employees = Vec::new();

    for (index, record) in csv_reader.deserialize::<EmployeeRow>().enumerate() {
        let row = record?;
        employees.push(row.into_employee(index + 1)?);
    }

    Ok(employees)
}

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Salary")]
    salary: String,
    #[serde(rename = "HireDate")]
    hire_date: String,
}

impl EmployeeRow {
    fn into_employee(self, row: usize) -> Result<Employee, LoadError> {
        let invalid = |field: &'static str, value: &str| LoadError::InvalidField {
            row,
            field,
            value: value.to_string(),
        };

        let age = self
            .age
            .parse::<i32>()
            .map_err(|_| invalid("Age", &self.age))?;
        let salary = Decimal::from_str(&self.salary).map_err(|_| invalid("Salary", &self.salary))?;
        let hire_date =
            parse_calendar_date(&self.hire_date).ok_or_else(|| invalid("HireDate", &self.hire_date))?;

        Ok(Employee {
            name: self.name,
            age,
            department: self.department,
            salary,
            hire_date,
        })
    }
}
