use chrono::{Datelike, NaiveDate, Utc};

use crate::constants::DATE_FORMAT;
use crate::errors::{Error, Result, ValidationError};

/// Weekday index with Sunday = 0 through Saturday = 6.
pub fn day_of_week_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "date must be formatted as YYYY-MM-DD, got '{raw}'"
        )))
    })
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
