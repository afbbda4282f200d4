use chrono::{Local, NaiveDate};

use crate::domain::MonthYear;
use crate::errors::BudgetError;

pub struct PeriodService;

impl PeriodService {
    pub fn current() -> MonthYear {
        MonthYear::containing(Local::now().date_naive())
    }

    /// Months offered for selection, newest first: the current year up to
    /// the current month, then every month of the previous year.
    pub fn available_months(today: NaiveDate) -> Vec<MonthYear> {
        let newest = MonthYear::containing(today);
        let oldest_year = newest.year() - 1;
        let mut months = Vec::with_capacity(newest.month() as usize + 12);
        let mut cursor = newest;
        while cursor.year() >= oldest_year {
            months.push(cursor);
            cursor = cursor.previous();
        }
        months
    }

    /// Resolves an optional `MM-YYYY` request, defaulting to the current month.
    pub fn resolve(requested: Option<&str>) -> Result<MonthYear, BudgetError> {
        match requested.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => MonthYear::parse_api(value),
            None => Ok(Self::current()),
        }
    }
}
