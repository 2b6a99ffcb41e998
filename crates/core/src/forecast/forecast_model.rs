use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsForecast {
    pub goal_id: i64,
    pub remaining_amount: Decimal,
    pub average_monthly_savings: Decimal,
    /// Not rounded. Zero or negative when the goal is already met.
    pub months_to_goal: Decimal,
}
