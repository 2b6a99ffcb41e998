//! Analytics result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::MonthKey;

/// Total expense of one category within a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    pub total: Decimal,
}

/// Income and expense totals of one month with any activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: MonthKey,
    pub income: Decimal,
    pub expense: Decimal,
}

impl MonthlyTrend {
    pub fn net_savings(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Mean expense amount for a weekday (0 = Sunday .. 6 = Saturday).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayOfWeekAverage {
    pub day_of_week: u32,
    pub average_amount: Decimal,
}
