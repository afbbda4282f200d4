use std::fmt;

use serde::{Deserialize, Serialize};

use crate::currency::MoneyFormatter;

/// Three-way classification of how a period's spending compares to its budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::OnTrack => "on-track",
            BudgetStatus::Warning => "warning",
            BudgetStatus::OverBudget => "over-budget",
        };
        f.write_str(label)
    }
}

/// Tunable cut-offs shared by the summary status and the insight rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetThresholds {
    /// Percentage used at which a budget that is not over enters `Warning` (inclusive).
    pub warning_percent: i64,
    /// Fraction of the total budget under which spending counts as significantly low.
    pub under_spend_ratio: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            warning_percent: 80,
            under_spend_ratio: 0.7,
        }
    }
}

/// Totals for one budget period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSummary {
    pub total_allotted: f64,
    pub total_spent: f64,
    pub remaining: f64,
    /// Rounded, unclamped; values above 100 mean the budget was exceeded.
    pub percentage_used: i64,
    pub status: BudgetStatus,
}

impl BudgetSummary {
    pub fn from_totals(
        total_allotted: f64,
        total_spent: f64,
        thresholds: &BudgetThresholds,
    ) -> Self {
        let remaining = total_allotted - total_spent;
        let percentage_used = if total_allotted > 0.0 {
            round_half_up(percent_of(total_spent, total_allotted))
        } else {
            0
        };
        let status = if total_spent > total_allotted {
            BudgetStatus::OverBudget
        } else if percentage_used >= thresholds.warning_percent {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        };
        Self {
            total_allotted,
            total_spent,
            remaining,
            percentage_used,
            status,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_spent > self.total_allotted
    }

    /// Amount spent beyond the total budget, zero when within budget.
    pub fn overage(&self) -> f64 {
        (self.total_spent - self.total_allotted).max(0.0)
    }

    pub fn formatted(&self, formatter: &MoneyFormatter) -> FormattedSummary {
        FormattedSummary {
            total_budget: formatter.format(self.total_allotted),
            total_spent: formatter.format(self.total_spent),
            total_remaining: formatter.format(self.remaining),
            percent_used: format!("{}%", self.percentage_used),
        }
    }
}

/// Currency-rendered copy of a [`BudgetSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormattedSummary {
    pub total_budget: String,
    pub total_spent: String,
    pub total_remaining: String,
    pub percent_used: String,
}

/// Progress of a single category against its allotment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryProgress {
    /// Unclamped percentage; zero when nothing was allotted.
    pub raw_percent: f64,
    /// `raw_percent` capped at 100 for progress bars.
    pub display_percent: f64,
    pub over_budget: bool,
}

impl CategoryProgress {
    pub fn from_amounts(allotted: f64, spent: f64) -> Self {
        let raw_percent = if allotted > 0.0 {
            percent_of(spent, allotted)
        } else {
            0.0
        };
        Self {
            raw_percent,
            display_percent: raw_percent.min(100.0),
            over_budget: spent > allotted,
        }
    }

    pub fn rounded_percent(&self) -> i64 {
        round_half_up(self.raw_percent)
    }

    pub fn label(&self) -> String {
        format!("{}%", self.rounded_percent())
    }
}

/// `part / whole × 100`, multiplied first so exact halves such as 127.5 stay exact.
fn percent_of(part: f64, whole: f64) -> f64 {
    part * 100.0 / whole
}

pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
