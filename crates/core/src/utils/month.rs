//! Calendar month keys (`YYYY-MM`).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A calendar month, ordered chronologically.
///
/// Serialized as the string `YYYY-MM`, which also sorts chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(1..=9999).contains(&year) {
            return Err(invalid_month(&format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses a strict `YYYY-MM` string.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let bytes = raw.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid_month(raw));
        }
        let digits_ok = bytes[..4]
            .iter()
            .chain(&bytes[5..])
            .all(|b| b.is_ascii_digit());
        if !digits_ok {
            return Err(invalid_month(raw));
        }
        let year: i32 = raw[..4].parse().map_err(|_| invalid_month(raw))?;
        let month: u32 = raw[5..].parse().map_err(|_| invalid_month(raw))?;
        Self::new(year, month).map_err(|_| invalid_month(raw))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Year and month were range-checked at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// True when `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

fn invalid_month(raw: &str) -> Error {
    Error::Validation(ValidationError::InvalidInput(format!(
        "month must be formatted as YYYY-MM, got '{raw}'"
    )))
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_month() {
        let key = MonthKey::parse("2024-03").unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 3);
        assert_eq!(key.to_string(), "2024-03");
    }

    #[test]
    fn rejects_malformed_months() {
        for raw in ["", "2024", "2024-3", "2024-13", "2024-00", "24-03-01", "abcd-ef", "2024/03"] {
            assert!(MonthKey::parse(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn month_bounds_cover_leap_february() {
        let key = MonthKey::parse("2024-02").unwrap();
        assert_eq!(key.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(key.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let december = MonthKey::parse("2023-12").unwrap();
        assert_eq!(december.last_day(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn contains_matches_only_same_month() {
        let key = MonthKey::parse("2024-05").unwrap();
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2023, 5, 10).unwrap()));
    }

    #[test]
    fn ordering_is_chronological() {
        let a = MonthKey::parse("2023-12").unwrap();
        let b = MonthKey::parse("2024-01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn serializes_as_string() {
        let key = MonthKey::parse("2024-07").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-07\"");
        let back: MonthKey = serde_json::from_str("\"2024-07\"").unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<MonthKey>("\"2024-7\"").is_err());
    }
}
