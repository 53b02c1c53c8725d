use chrono::{Duration, NaiveDate};
use datasift::filter_employees_json;
use datasift::workflows::employees::{
    filter_employees, read_employees, Employee, EmployeeCriteria, EmployeeSummary,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn roster() -> Vec<Employee> {
    let row = |name: &str, age, department: &str, salary, hire_date| Employee {
        name: name.to_string(),
        age,
        department: department.to_string(),
        salary,
        hire_date,
    };

    vec![
        row("Alice", 30, "IT", dec!(6000), ymd(2018, 3, 1)),
        row("Bob", 28, "Finance", dec!(7500.50), ymd(2019, 7, 15)),
        row("Charlotte", 45, "IT", dec!(8000), ymd(2018, 1, 1)),
        row("Dan", 35, "HR", dec!(6000), ymd(2018, 1, 1)),
        row("Eve", 26, "IT", dec!(5000), ymd(2017, 1, 1)),
        row("Frank", 39, "Finance", dec!(9500), ymd(2020, 1, 1)),
        row("Grace", 33, "Finance", dec!(8999.99), ymd(2016, 12, 31)),
    ]
}

#[test]
fn roster_report_matches_expected_json() {
    let json = filter_employees_json(&roster());
    let summary: EmployeeSummary = serde_json::from_str(&json).expect("summary json parses");

    assert_eq!(summary.names, vec!["Alice", "Bob", "Eve"]);
    assert_eq!(summary.total_salary, dec!(18500.50));
    assert_eq!(summary.average_salary, dec!(6166.83));
    assert_eq!(summary.min_salary, dec!(5000));
    assert_eq!(summary.max_salary, dec!(7500.50));
    assert_eq!(summary.count, 3);
}

#[test]
fn report_uses_pascal_case_keys() {
    let value: serde_json::Value =
        serde_json::from_str(&filter_employees_json(&roster())).expect("json parses");
    let object = value.as_object().expect("top-level object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    for key in ["Names", "TotalSalary", "AverageSalary", "MinSalary", "MaxSalary", "Count"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(keys.len(), 6);
}

#[test]
fn empty_roster_reports_zeroes() {
    assert_eq!(
        filter_employees_json(&[]),
        r#"{"Names":[],"TotalSalary":0,"AverageSalary":0,"MinSalary":0,"MaxSalary":0,"Count":0}"#
    );
}

#[test]
fn output_is_byte_identical_across_calls() {
    let employees = roster();
    assert_eq!(filter_employees_json(&employees), filter_employees_json(&employees));
}

#[test]
fn csv_export_flows_into_the_report() {
    let csv = "Name,Age,Department,Salary,HireDate\n\
Alice,30,IT,6000,2018-03-01\n\
Dan,35,HR,6000,2018-01-01\n\
Bob,28,Finance,7500.50,2019-07-15T09:00:00Z\n";
    let employees = read_employees(csv.as_bytes()).expect("csv loads");
    let summary = filter_employees(&employees, &EmployeeCriteria::default());

    assert_eq!(summary.names, vec!["Alice", "Bob"]);
    assert_eq!(summary.total_salary, dec!(13500.50));
}

fn employee_strategy() -> impl Strategy<Value = Employee> {
    (
        "[A-Za-z]{1,10}",
        20i32..46,
        prop::sample::select(vec!["IT", "Finance", "HR", "it"]),
        400_000i64..1_000_000,
        0i64..3_000,
    )
        .prop_map(|(name, age, department, cents, days)| Employee {
            name,
            age,
            department: department.to_string(),
            salary: Decimal::new(cents, 2),
            hire_date: ymd(2014, 1, 1) + Duration::days(days),
        })
}

proptest! {
    #[test]
    fn summary_is_consistent_with_the_matching_records(
        employees in prop::collection::vec(employee_strategy(), 0..40)
    ) {
        let criteria = EmployeeCriteria::default();
        let summary = filter_employees(&employees, &criteria);
        let matching: Vec<&Employee> = employees.iter().filter(|e| criteria.matches(e)).collect();

        prop_assert_eq!(summary.count, matching.len());
        prop_assert_eq!(summary.names.len(), summary.count);

        let mut expected_names: Vec<String> = matching.iter().map(|e| e.name.clone()).collect();
        let mut reported_names = summary.names.clone();
        expected_names.sort();
        reported_names.sort();
        prop_assert_eq!(reported_names, expected_names);

        for pair in summary.names.windows(2) {
            let (left, right) = (pair[0].chars().count(), pair[1].chars().count());
            prop_assert!(left > right || (left == right && pair[0] <= pair[1]));
        }

        if matching.is_empty() {
            prop_assert_eq!(summary, EmployeeSummary::default());
        } else {
            let total: Decimal = matching.iter().map(|e| e.salary).sum();
            prop_assert_eq!(summary.total_salary, total);
            prop_assert_eq!(
                summary.average_salary,
                (total / Decimal::from(matching.len())).round_dp(2)
            );
            prop_assert_eq!(summary.min_salary, matching.iter().map(|e| e.salary).min().unwrap());
            prop_assert_eq!(summary.max_salary, matching.iter().map(|e| e.salary).max().unwrap());
        }
    }
}
