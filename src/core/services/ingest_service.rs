//! Normalizes budget payloads from the REST API into typed records.

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::domain::{Budget, BudgetCategoryRecord, MonthYear};
use crate::errors::BudgetError;

use super::{CategoryService, ServiceResult};

/// Budget row as returned by the API. Optional fields may be absent or null;
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawBudgetRecord {
    #[serde(default)]
    pub id: String,
    pub category: String,
    pub amount: f64,
    #[serde(default, alias = "spent_amount")]
    pub spent: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "type", alias = "category_type")]
    pub category_type: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub currency_id: Option<String>,
    #[serde(default)]
    pub currency: Option<RawCurrency>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawCurrency {
    pub code: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

pub struct IngestService;

impl IngestService {
    pub fn parse_records(json: &str) -> ServiceResult<Vec<RawBudgetRecord>> {
        let records: Vec<RawBudgetRecord> =
            serde_json::from_str(json).map_err(BudgetError::from)?;
        tracing::debug!(count = records.len(), "parsed raw budget records");
        Ok(records)
    }

    /// Applies defaults, type classification, and the color table once so
    /// downstream consumers see fully-populated records.
    ///
    /// Non-finite amounts are treated as zero; negative amounts and blank
    /// category names are rejected.
    pub fn normalize(raw: &RawBudgetRecord) -> ServiceResult<BudgetCategoryRecord> {
        let name = raw.category.trim();
        if name.is_empty() {
            return Err(BudgetError::InvalidRecord(format!(
                "budget `{}` has an empty category name",
                raw.id
            ))
            .into());
        }
        let allotted_amount = sanitize_amount(&raw.id, "amount", raw.amount)?;
        let spent_amount = sanitize_amount(&raw.id, "spent", raw.spent.unwrap_or(0.0))?;

        let supplied_type = raw.category_type.as_deref();
        let category_type = CategoryService::resolve_type(supplied_type, name);
        let color =
            CategoryService::resolve_color(raw.color.as_deref(), supplied_type, category_type);

        Ok(BudgetCategoryRecord {
            id: raw.id.clone(),
            name: name.to_string(),
            category_type,
            allotted_amount,
            spent_amount,
            color,
        })
    }

    pub fn normalize_all(raw: &[RawBudgetRecord]) -> ServiceResult<Vec<BudgetCategoryRecord>> {
        raw.iter().map(Self::normalize).collect()
    }

    /// Groups API rows into the budget for `period`. The first row provides the
    /// budget id and, when present, the currency; an empty response yields an
    /// empty budget.
    pub fn assemble(
        raw: &[RawBudgetRecord],
        period: MonthYear,
        default_currency: CurrencyCode,
    ) -> ServiceResult<Budget> {
        let Some(first) = raw.first() else {
            tracing::info!(period = %period, "no budget rows returned for period");
            return Ok(Budget::empty(period, default_currency));
        };
        let currency = first
            .currency
            .as_ref()
            .map(|currency| CurrencyCode::new(currency.code.as_str()))
            .filter(|code| !code.as_str().is_empty())
            .unwrap_or(default_currency);
        Ok(Budget {
            id: first.id.clone(),
            period,
            currency,
            categories: Self::normalize_all(raw)?,
        })
    }

    pub fn budget_from_json(
        json: &str,
        period: MonthYear,
        default_currency: CurrencyCode,
    ) -> ServiceResult<Budget> {
        let raw = Self::parse_records(json)?;
        Self::assemble(&raw, period, default_currency)
    }
}

fn sanitize_amount(id: &str, field: &'static str, value: f64) -> Result<f64, BudgetError> {
    if !value.is_finite() {
        tracing::warn!(id, field, value, "non-finite amount treated as zero");
        return Ok(0.0);
    }
    if value < 0.0 {
        return Err(BudgetError::InvalidRecord(format!(
            "budget `{id}` has a negative {field}: {value}"
        )));
    }
    Ok(value)
}
