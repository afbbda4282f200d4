//! Month granularity used to request and label budget periods.

use std::fmt;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::BudgetError;

/// A calendar month, `month` in `1..=12`. Deserialization goes through
/// [`MonthYear::new`], so the range holds for every value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "RawMonthYear")]
pub struct MonthYear {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawMonthYear {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonthYear> for MonthYear {
    type Error = BudgetError;

    fn try_from(raw: RawMonthYear) -> Result<Self, Self::Error> {
        Self::new(raw.month, raw.year)
    }
}

impl MonthYear {
    pub fn new(month: u32, year: i32) -> Result<Self, BudgetError> {
        if !(1..=12).contains(&month) {
            return Err(BudgetError::InvalidPeriod(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses the API query form `MM-YYYY`.
    pub fn parse_api(value: &str) -> Result<Self, BudgetError> {
        let invalid = || BudgetError::InvalidPeriod(format!("expected MM-YYYY, got `{value}`"));
        let (month, year) = value.trim().split_once('-').ok_or_else(invalid)?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        Self::new(month, year)
    }

    /// API query form, e.g. `03-2025`.
    pub fn to_api_string(&self) -> String {
        format!("{:02}-{}", self.month, self.year)
    }

    /// Parses a human label such as `March 2025` (month names are case-insensitive
    /// and may be abbreviated).
    pub fn parse_label(value: &str) -> Result<Self, BudgetError> {
        let invalid =
            || BudgetError::InvalidPeriod(format!("expected `Month YYYY`, got `{value}`"));
        let mut parts = value.split_whitespace();
        let (Some(name), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let month = name.parse::<Month>().map_err(|_| invalid())?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        Self::new(month.number_from_month(), year)
    }

    /// Long label, e.g. `March 2025`.
    pub fn label(&self) -> String {
        let name = Month::try_from(self.month as u8)
            .map(|month| month.name())
            .unwrap_or("Unknown");
        format!("{name} {}", self.year)
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
