//! Conversions between SQLite TEXT columns and domain values.

use std::str::FromStr;

use log::error;
use rust_decimal::Decimal;

/// Parses a decimal stored as TEXT. Unparseable values are logged and read as zero
/// so that one corrupt row cannot break a whole report.
pub fn parse_decimal(value: &str, field_name: &str) -> Decimal {
    Decimal::from_str(value.trim()).unwrap_or_else(|e| {
        error!(
            "Failed to parse {} '{}' as Decimal: {}. Using zero.",
            field_name, value, e
        );
        Decimal::ZERO
    })
}

/// Tags are stored as a JSON array of strings.
pub fn encode_tags(tags: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tags)
}

pub fn decode_tags(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        error!("Failed to parse tags '{}': {}", raw, e);
        Vec::new()
    })
}
