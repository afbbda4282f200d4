use thiserror::Error;

/// Error type for the fallible edges of the crate: ingestion, periods,
/// configuration and export.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid budget record: {0}")]
    InvalidRecord(String),
    #[error("Invalid budget period: {0}")]
    InvalidPeriod(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
