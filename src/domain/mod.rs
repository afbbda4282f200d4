pub mod budget;
pub mod category;
pub mod common;
pub mod insight;
pub mod period;
pub mod summary;

pub use budget::{Budget, BudgetCategoryRecord};
pub use category::{CategoryType, NEUTRAL_COLOR};
pub use common::Displayable;
pub use insight::{Insight, InsightKind};
pub use period::MonthYear;
pub use summary::{
    BudgetStatus, BudgetSummary, BudgetThresholds, CategoryProgress, FormattedSummary,
};
