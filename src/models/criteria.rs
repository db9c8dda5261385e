use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{AggregateError, Result};

/// Binary filter on the `is_day` flag column, independent of the date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    Day,
    Night,
}

impl DaySelector {
    /// Parse the `DAY`/`NIGHT` keyword, case-insensitively.
    pub fn from_keyword(keyword: &str) -> Result<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "DAY" => Ok(DaySelector::Day),
            "NIGHT" => Ok(DaySelector::Night),
            _ => Err(AggregateError::UnknownSelector(keyword.to_string())),
        }
    }

    /// Whether a row with the given daylight flag passes this selector.
    pub fn matches(&self, is_day: bool) -> bool {
        match self {
            DaySelector::Day => is_day,
            DaySelector::Night => !is_day,
        }
    }
}

/// Row selection criteria: a half-open date interval `[start, end)` at day
/// granularity plus a day/night selector. Built once from CLI input and
/// immutable for the rest of the run.
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria {
    start: NaiveDateTime,
    end: NaiveDateTime,
    selector: DaySelector,
}

impl FilterCriteria {
    /// The date bounds are normalized to midnight, so the interval covers
    /// every timestamp from `start_date` 00:00 inclusive up to but excluding
    /// `end_date` 00:00.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, selector: DaySelector) -> Self {
        Self {
            start: start_date.and_hms_opt(0, 0, 0).unwrap(),
            end: end_date.and_hms_opt(0, 0, 0).unwrap(),
            selector,
        }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    pub fn selector(&self) -> DaySelector {
        self.selector
    }
}
