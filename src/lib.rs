#![doc(test(attr(deny(warnings))))]

//! Budget Insights turns fetched per-category budget records into the
//! derived views a budgeting dashboard renders: period summaries with a
//! status classification, per-category progress, category type and color
//! assignment, and advisory insights.
//!
//! ```
//! use budget_insights::core::services::{BudgetService, InsightService};
//! use budget_insights::domain::{BudgetCategoryRecord, BudgetStatus};
//!
//! let records = vec![
//!     BudgetCategoryRecord::new("1", "Rent", 1200.0, 1150.0),
//!     BudgetCategoryRecord::new("2", "Groceries", 500.0, 472.0),
//! ];
//! let summary = BudgetService::summarize(&records);
//! assert_eq!(summary.percentage_used, 95);
//! assert_eq!(summary.status, BudgetStatus::Warning);
//!
//! let insights = InsightService::generate(&summary, &records);
//! assert_eq!(insights.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Insights tracing initialized.");
    });
}
