use crate::currency::MoneyFormatter;
use crate::domain::{BudgetCategoryRecord, BudgetSummary, BudgetThresholds, Insight};

const UNDER_SPEND_MESSAGE: &str = "You're significantly under budget. \
    Consider adjusting your budget or saving the extra money.";

/// Derives advisory messages from a summary and the records behind it.
pub struct InsightService;

impl InsightService {
    /// Generates insights with default thresholds and USD formatting.
    pub fn generate(summary: &BudgetSummary, records: &[BudgetCategoryRecord]) -> Vec<Insight> {
        Self::generate_with(
            summary,
            records,
            &BudgetThresholds::default(),
            &MoneyFormatter::usd(),
        )
    }

    /// Output order: the over-budget count, one line per over-budget category
    /// in record order, the overall overage or remaining amount, then the
    /// under-spend suggestion when it applies.
    pub fn generate_with(
        summary: &BudgetSummary,
        records: &[BudgetCategoryRecord],
        thresholds: &BudgetThresholds,
        formatter: &MoneyFormatter,
    ) -> Vec<Insight> {
        let mut insights = Vec::new();

        let over: Vec<&BudgetCategoryRecord> =
            records.iter().filter(|record| record.is_over_budget()).collect();
        if !over.is_empty() {
            let noun = if over.len() == 1 { "category" } else { "categories" };
            insights.push(Insight::warning(format!(
                "You've gone over budget in {} {noun}.",
                over.len()
            )));
            for record in &over {
                insights.push(Insight::warning(format!(
                    "{}: over by {}",
                    record.name,
                    formatter.format(record.spent_amount - record.allotted_amount)
                )));
            }
        }

        if summary.total_spent > summary.total_allotted {
            insights.push(Insight::warning(format!(
                "Overall, you've spent {} more than budgeted.",
                formatter.format(summary.total_spent - summary.total_allotted)
            )));
        } else {
            insights.push(Insight::success(format!(
                "You're doing well! Still {} under budget.",
                formatter.format(summary.total_allotted - summary.total_spent)
            )));
            if summary.total_allotted > 0.0
                && summary.total_spent < summary.total_allotted * thresholds.under_spend_ratio
            {
                insights.push(Insight::info(UNDER_SPEND_MESSAGE));
            }
        }

        tracing::debug!(
            count = insights.len(),
            over_budget_categories = over.len(),
            "generated budget insights"
        );
        insights
    }
}
