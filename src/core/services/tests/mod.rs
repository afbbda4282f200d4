mod budget_service_tests;
mod export_service_tests;
mod insight_service_tests;

use crate::domain::BudgetCategoryRecord;

fn record(name: &str, allotted: f64, spent: f64) -> BudgetCategoryRecord {
    BudgetCategoryRecord::new(name.to_lowercase().replace(' ', "-"), name, allotted, spent)
}
