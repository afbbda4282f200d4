use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::{
    Budget, BudgetCategoryRecord, BudgetSummary, CategoryProgress, FormattedSummary, Insight,
    MonthYear,
};

use super::{BudgetService, InsightService};

/// Per-category row of an overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryView {
    pub record: BudgetCategoryRecord,
    pub progress: CategoryProgress,
    pub formatted_allotted: String,
    pub formatted_spent: String,
    pub formatted_remaining: String,
}

/// Everything a budget page renders for one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetOverview {
    pub period: MonthYear,
    pub summary: BudgetSummary,
    pub formatted: FormattedSummary,
    pub categories: Vec<CategoryView>,
    pub insights: Vec<Insight>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn overview(budget: &Budget, config: &Config) -> BudgetOverview {
        let thresholds = config.thresholds();
        let formatter = config.formatter_for(&budget.currency);

        let summary = BudgetService::summarize_budget(budget, &thresholds);
        let insights =
            InsightService::generate_with(&summary, &budget.categories, &thresholds, &formatter);
        let categories = budget
            .categories
            .iter()
            .map(|record| CategoryView {
                progress: record.progress(),
                formatted_allotted: formatter.format(record.allotted_amount),
                formatted_spent: formatter.format(record.spent_amount),
                formatted_remaining: formatter.format(record.remaining()),
                record: record.clone(),
            })
            .collect();

        BudgetOverview {
            period: budget.period,
            formatted: summary.formatted(&formatter),
            summary,
            categories,
            insights,
        }
    }
}
