use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::domain::category::CategoryType;
use crate::domain::common::Displayable;
use crate::domain::period::MonthYear;
use crate::domain::summary::CategoryProgress;

/// One category's allotment and spend for a period, normalized for consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub allotted_amount: f64,
    pub spent_amount: f64,
    pub color: String,
}

impl BudgetCategoryRecord {
    /// Builds a record whose type is inferred from `name` and whose color
    /// comes from that type.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        allotted_amount: f64,
        spent_amount: f64,
    ) -> Self {
        let name = name.into();
        let category_type = CategoryType::from_name(&name);
        Self {
            id: id.into(),
            name,
            category_type,
            allotted_amount,
            spent_amount,
            color: category_type.color().to_string(),
        }
    }

    pub fn with_type(mut self, category_type: CategoryType) -> Self {
        self.category_type = category_type;
        self.color = category_type.color().to_string();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn remaining(&self) -> f64 {
        self.allotted_amount - self.spent_amount
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent_amount > self.allotted_amount
    }

    /// Amount spent beyond the allotment, zero when within it.
    pub fn overage(&self) -> f64 {
        (self.spent_amount - self.allotted_amount).max(0.0)
    }

    pub fn progress(&self) -> CategoryProgress {
        CategoryProgress::from_amounts(self.allotted_amount, self.spent_amount)
    }
}

impl Displayable for BudgetCategoryRecord {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.category_type)
    }
}

/// All category records for one month, as presented to a budgeting view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: String,
    pub period: MonthYear,
    pub currency: CurrencyCode,
    pub categories: Vec<BudgetCategoryRecord>,
}

impl Budget {
    pub fn empty(period: MonthYear, currency: CurrencyCode) -> Self {
        Self {
            id: String::new(),
            period,
            currency,
            categories: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_allotted(&self) -> f64 {
        self.categories.iter().map(|c| c.allotted_amount).sum()
    }

    pub fn total_spent(&self) -> f64 {
        self.categories.iter().map(|c| c.spent_amount).sum()
    }
}
