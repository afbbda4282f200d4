use tempfile::TempDir;

use super::record;
use crate::core::services::{ExportService, ServiceError};
use crate::currency::CurrencyCode;
use crate::domain::{Budget, MonthYear};

fn sample_budget() -> Budget {
    let mut budget = Budget::empty(MonthYear::new(3, 2025).unwrap(), CurrencyCode::default());
    budget.id = "b-1".into();
    budget.categories = vec![
        record("Rent", 1200.0, 1150.0),
        record("Dining, Takeout", 200.0, 255.0),
        record("Misc", 0.0, 0.0),
    ];
    budget
}

#[test]
fn csv_has_header_rows_and_total() {
    let csv = ExportService::to_csv_string(&sample_budget()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "Category,Budget Amount,Spent Amount,Remaining,Usage %",
            "Rent,1200.00,1150.00,50.00,96%",
            "\"Dining, Takeout\",200.00,255.00,-55.00,128%",
            "Misc,0.00,0.00,0.00,0%",
            "TOTAL,1400.00,1405.00,-5.00,100%",
        ]
    );
}

#[test]
fn file_name_uses_one_based_month() {
    assert_eq!(ExportService::file_name(&sample_budget()), "budget_3_2025.csv");
}

#[test]
fn write_to_dir_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = ExportService::write_to_dir(&sample_budget(), temp.path()).unwrap();
    assert_eq!(path, temp.path().join("budget_3_2025.csv"));
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.starts_with("Category,"));
}

#[test]
fn write_to_missing_dir_is_invalid() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");
    let err = ExportService::write_to_dir(&sample_budget(), &missing).unwrap_err();
    assert!(matches!(err, ServiceError::Invalid(_)));
}
