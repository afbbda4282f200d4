pub mod budget_service;
pub mod category_service;
pub mod export_service;
pub mod ingest_service;
pub mod insight_service;
pub mod period_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use export_service::ExportService;
pub use ingest_service::{IngestService, RawBudgetRecord};
pub use insight_service::InsightService;
pub use period_service::PeriodService;
pub use summary_service::{BudgetOverview, CategoryView, SummaryService};

use crate::errors::BudgetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("{0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
