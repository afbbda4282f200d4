//! Operator CLI: summarize, export, and classify budget payloads saved from the API.

mod handlers;
pub mod output;

use thiserror::Error;

use crate::core::services::ServiceError;
use crate::errors::BudgetError;

pub use handlers::Command;

pub const USAGE: &str = "\
Usage: budget_insights_cli <command> [options]

Commands:
  summary <budgets.json> [--period MM-YYYY] [--json]   Summarize a saved budget payload
  export <budgets.json> <dir> [--period MM-YYYY]       Write the budget as CSV into <dir>
  classify <name>...                                   Show the category type and color for names
  months                                               List selectable budget months
  help                                                 Show this message";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Budget(#[from] BudgetError),
    #[error("{0}")]
    Usage(String),
}

/// Parses `args` (without the program name) and runs the command.
pub fn run_cli<I, S>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let command = Command::parse(&args)?;
    tracing::debug!(?command, "running command");
    handlers::execute(command)
}
