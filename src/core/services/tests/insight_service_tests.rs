use super::record;
use crate::core::services::{BudgetService, InsightService};
use crate::currency::{CurrencyCode, FormatOptions, LocaleConfig, MoneyFormatter};
use crate::domain::{BudgetThresholds, InsightKind};

#[test]
fn single_overspend_reports_category_and_total() {
    let records = vec![record("Dining Out", 200.0, 255.0)];
    let summary = BudgetService::summarize(&records);
    let insights = InsightService::generate(&summary, &records);

    let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        [InsightKind::Warning, InsightKind::Warning, InsightKind::Warning]
    );
    assert_eq!(insights[0].message, "You've gone over budget in 1 category.");
    assert_eq!(insights[1].message, "Dining Out: over by $55.00");
    assert!(insights[1].message.contains("over by $55.00"));
    assert_eq!(
        insights[2].message,
        "Overall, you've spent $55.00 more than budgeted."
    );
}

#[test]
fn aggregate_count_precedes_per_category_messages() {
    let records = vec![
        record("Shoes", 50.0, 80.0),
        record("Rent", 1500.0, 900.0),
        record("Movies", 20.0, 35.5),
    ];
    let summary = BudgetService::summarize(&records);
    let insights = InsightService::generate(&summary, &records);

    assert_eq!(insights[0].message, "You've gone over budget in 2 categories.");
    assert_eq!(insights[1].message, "Shoes: over by $30.00");
    assert_eq!(insights[2].message, "Movies: over by $15.50");
    // Overall still within budget, and spending is far below it.
    assert_eq!(insights[3].kind, InsightKind::Success);
    assert_eq!(insights[4].kind, InsightKind::Info);
    assert_eq!(insights.len(), 5);
}

#[test]
fn empty_records_produce_single_zero_success() {
    let summary = BudgetService::summarize(&[]);
    let insights = InsightService::generate(&summary, &[]);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::Success);
    assert_eq!(
        insights[0].message,
        "You're doing well! Still $0.00 under budget."
    );
}

#[test]
fn healthy_spending_gets_success_without_suggestion() {
    let records = vec![record("Rent", 1200.0, 1150.0), record("Groceries", 500.0, 472.0)];
    let summary = BudgetService::summarize(&records);
    let insights = InsightService::generate(&summary, &records);
    assert_eq!(insights.len(), 1);
    assert_eq!(
        insights[0].message,
        "You're doing well! Still $78.00 under budget."
    );
}

#[test]
fn under_spend_suggestion_threshold_is_strict() {
    let at_ratio = vec![record("Groceries", 1000.0, 700.0)];
    let summary = BudgetService::summarize(&at_ratio);
    let insights = InsightService::generate(&summary, &at_ratio);
    assert!(insights.iter().all(|i| i.kind != InsightKind::Info));

    let below_ratio = vec![record("Groceries", 1000.0, 699.99)];
    let summary = BudgetService::summarize(&below_ratio);
    let insights = InsightService::generate(&summary, &below_ratio);
    assert_eq!(insights.last().map(|i| i.kind), Some(InsightKind::Info));
}

#[test]
fn zero_budget_never_suggests_adjusting() {
    let records = vec![record("Misc", 0.0, 0.0)];
    let summary = BudgetService::summarize(&records);
    let insights = InsightService::generate(&summary, &records);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::Success);
}

#[test]
fn overall_overspend_skips_suggestion_even_with_low_categories() {
    let records = vec![record("Rent", 100.0, 10.0), record("Misc", 0.0, 200.0)];
    let summary = BudgetService::summarize(&records);
    let insights = InsightService::generate(&summary, &records);
    assert_eq!(insights.len(), 3);
    assert_eq!(insights[1].message, "Misc: over by $200.00");
    assert_eq!(
        insights[2].message,
        "Overall, you've spent $110.00 more than budgeted."
    );
}

#[test]
fn uses_supplied_formatter_and_thresholds() {
    let records = vec![record("Groceries", 1000.0, 850.0)];
    let summary = BudgetService::summarize(&records);
    let formatter = MoneyFormatter::new(
        CurrencyCode::new("EUR"),
        LocaleConfig::default(),
        FormatOptions::default(),
    );
    let thresholds = BudgetThresholds {
        warning_percent: 80,
        under_spend_ratio: 0.9,
    };
    let insights = InsightService::generate_with(&summary, &records, &thresholds, &formatter);
    assert_eq!(
        insights[0].message,
        "You're doing well! Still €150.00 under budget."
    );
    assert_eq!(insights[1].kind, InsightKind::Info);
}
