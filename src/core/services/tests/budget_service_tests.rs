use super::record;
use crate::core::services::BudgetService;
use crate::domain::{BudgetStatus, BudgetThresholds};

const EPSILON: f64 = 1e-9;

#[test]
fn sums_totals_and_classifies_warning() {
    let records = vec![record("Rent", 1200.0, 1150.0), record("Groceries", 500.0, 472.0)];
    let summary = BudgetService::summarize(&records);
    assert!((summary.total_allotted - 1700.0).abs() < EPSILON);
    assert!((summary.total_spent - 1622.0).abs() < EPSILON);
    assert!((summary.remaining - 78.0).abs() < EPSILON);
    assert_eq!(summary.percentage_used, 95);
    assert_eq!(summary.status, BudgetStatus::Warning);
}

#[test]
fn single_overspent_category_is_over_budget() {
    let summary = BudgetService::summarize(&[record("Dining Out", 200.0, 255.0)]);
    assert!((summary.remaining + 55.0).abs() < EPSILON);
    assert_eq!(summary.percentage_used, 128);
    assert_eq!(summary.status, BudgetStatus::OverBudget);
}

#[test]
fn empty_input_is_all_zero_and_on_track() {
    let summary = BudgetService::summarize(&[]);
    assert_eq!(summary.total_allotted, 0.0);
    assert_eq!(summary.total_spent, 0.0);
    assert_eq!(summary.remaining, 0.0);
    assert_eq!(summary.percentage_used, 0);
    assert_eq!(summary.status, BudgetStatus::OnTrack);
}

#[test]
fn zero_budget_with_spending_has_zero_percent_but_is_over() {
    let summary = BudgetService::summarize(&[record("Misc", 0.0, 30.0)]);
    assert_eq!(summary.percentage_used, 0);
    assert_eq!(summary.status, BudgetStatus::OverBudget);
    assert!((summary.remaining + 30.0).abs() < EPSILON);
}

#[test]
fn zero_records_are_on_track() {
    let summary = BudgetService::summarize(&[record("Misc", 0.0, 0.0), record("Other", 0.0, 0.0)]);
    assert_eq!(summary.percentage_used, 0);
    assert_eq!(summary.status, BudgetStatus::OnTrack);
}

#[test]
fn over_budget_wins_over_warning_threshold() {
    let summary = BudgetService::summarize(&[record("Fuel", 1000.0, 1001.0)]);
    assert_eq!(summary.percentage_used, 100);
    assert_eq!(summary.status, BudgetStatus::OverBudget);
}

#[test]
fn warning_boundary_is_inclusive_at_eighty() {
    let at_79 = BudgetService::summarize(&[record("Books", 100.0, 79.0)]);
    assert_eq!(at_79.percentage_used, 79);
    assert_eq!(at_79.status, BudgetStatus::OnTrack);

    let at_80 = BudgetService::summarize(&[record("Books", 100.0, 80.0)]);
    assert_eq!(at_80.percentage_used, 80);
    assert_eq!(at_80.status, BudgetStatus::Warning);

    // 79.5% rounds up into the warning band.
    let rounded = BudgetService::summarize(&[record("Books", 200.0, 159.0)]);
    assert_eq!(rounded.percentage_used, 80);
    assert_eq!(rounded.status, BudgetStatus::Warning);
}

#[test]
fn record_order_does_not_change_result() {
    let mut records = vec![
        record("Rent", 1200.0, 1150.0),
        record("Groceries", 500.0, 472.0),
        record("Gas Station", 150.0, 90.25),
        record("Doctor", 80.0, 0.0),
    ];
    let forward = BudgetService::summarize(&records);
    records.reverse();
    let backward = BudgetService::summarize(&records);
    assert!((forward.total_allotted - backward.total_allotted).abs() < EPSILON);
    assert!((forward.total_spent - backward.total_spent).abs() < EPSILON);
    assert_eq!(forward.percentage_used, backward.percentage_used);
    assert_eq!(forward.status, backward.status);
}

#[test]
fn remaining_always_matches_difference() {
    let cases = [
        vec![record("A", 10.5, 3.25)],
        vec![record("A", 0.0, 12.0), record("B", 5.0, 0.0)],
        vec![record("A", 999.99, 1000.01)],
    ];
    for records in cases {
        let summary = BudgetService::summarize(&records);
        let expected = summary.total_allotted - summary.total_spent;
        assert!((summary.remaining - expected).abs() < EPSILON);
    }
}

#[test]
fn custom_thresholds_are_honoured() {
    let thresholds = BudgetThresholds {
        warning_percent: 50,
        under_spend_ratio: 0.7,
    };
    let summary = BudgetService::summarize_with(&[record("Books", 100.0, 55.0)], &thresholds);
    assert_eq!(summary.status, BudgetStatus::Warning);
}

#[test]
fn over_budget_categories_keep_input_order() {
    let records = vec![
        record("Shoes", 50.0, 80.0),
        record("Rent", 1000.0, 1000.0),
        record("Movies", 20.0, 35.0),
    ];
    let names: Vec<_> = BudgetService::over_budget_categories(&records)
        .into_iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["Shoes", "Movies"]);
}

#[test]
fn category_progress_keeps_raw_value_for_detection() {
    let progress = BudgetService::category_progress(&record("Shoes", 50.0, 80.0));
    assert_eq!(progress.raw_percent, 160.0);
    assert_eq!(progress.display_percent, 100.0);
    assert!(progress.over_budget);
}
