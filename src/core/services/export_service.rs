use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::Budget;
use crate::errors::BudgetError;

use super::{BudgetService, ServiceError, ServiceResult};

const HEADERS: [&str; 5] = [
    "Category",
    "Budget Amount",
    "Spent Amount",
    "Remaining",
    "Usage %",
];

/// Spreadsheet export of a period's budget.
pub struct ExportService;

impl ExportService {
    /// `budget_{month}_{year}.csv`, month 1-based and unpadded.
    pub fn file_name(budget: &Budget) -> String {
        format!("budget_{}_{}.csv", budget.period.month(), budget.period.year())
    }

    /// One row per category followed by a `TOTAL` row.
    pub fn to_csv_string(budget: &Budget) -> ServiceResult<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(HEADERS).map_err(BudgetError::from)?;

        for category in &budget.categories {
            writer
                .write_record([
                    category.name.clone(),
                    format!("{:.2}", category.allotted_amount),
                    format!("{:.2}", category.spent_amount),
                    format!("{:.2}", category.remaining()),
                    category.progress().label(),
                ])
                .map_err(BudgetError::from)?;
        }

        let summary = BudgetService::summarize(&budget.categories);
        writer
            .write_record([
                "TOTAL".to_string(),
                format!("{:.2}", summary.total_allotted),
                format!("{:.2}", summary.total_spent),
                format!("{:.2}", summary.remaining),
                format!("{}%", summary.percentage_used),
            ])
            .map_err(BudgetError::from)?;

        let bytes = writer
            .into_inner()
            .map_err(|err| BudgetError::Io(err.into_error()))?;
        String::from_utf8(bytes).map_err(|err| ServiceError::Invalid(err.to_string()))
    }

    /// Writes the export into `dir` under [`ExportService::file_name`].
    pub fn write_to_dir(budget: &Budget, dir: &Path) -> ServiceResult<PathBuf> {
        if !dir.is_dir() {
            return Err(ServiceError::Invalid(format!(
                "export directory `{}` does not exist",
                dir.display()
            )));
        }
        let contents = Self::to_csv_string(budget)?;
        let path = dir.join(Self::file_name(budget));
        fs::write(&path, contents).map_err(BudgetError::from)?;
        tracing::info!(
            path = %path.display(),
            categories = budget.categories.len(),
            "exported budget"
        );
        Ok(path)
    }
}
