use crate::domain::{
    Budget, BudgetCategoryRecord, BudgetSummary, BudgetThresholds, CategoryProgress,
};

/// Reduces category records into period summaries.
pub struct BudgetService;

impl BudgetService {
    /// Summarizes records with the default 80% warning threshold.
    pub fn summarize(records: &[BudgetCategoryRecord]) -> BudgetSummary {
        Self::summarize_with(records, &BudgetThresholds::default())
    }

    /// Summarizes records; record order does not affect the result.
    pub fn summarize_with(
        records: &[BudgetCategoryRecord],
        thresholds: &BudgetThresholds,
    ) -> BudgetSummary {
        let (total_allotted, total_spent) =
            records.iter().fold((0.0, 0.0), |(allotted, spent), record| {
                (allotted + record.allotted_amount, spent + record.spent_amount)
            });
        let summary = BudgetSummary::from_totals(total_allotted, total_spent, thresholds);
        tracing::debug!(
            categories = records.len(),
            total_allotted,
            total_spent,
            percentage_used = summary.percentage_used,
            status = %summary.status,
            "summarized budget records"
        );
        summary
    }

    pub fn summarize_budget(budget: &Budget, thresholds: &BudgetThresholds) -> BudgetSummary {
        Self::summarize_with(&budget.categories, thresholds)
    }

    pub fn category_progress(record: &BudgetCategoryRecord) -> CategoryProgress {
        record.progress()
    }

    /// Records whose spend exceeds their allotment, in input order.
    pub fn over_budget_categories(
        records: &[BudgetCategoryRecord],
    ) -> Vec<&BudgetCategoryRecord> {
        records.iter().filter(|record| record.is_over_budget()).collect()
    }
}
