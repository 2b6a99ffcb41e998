//! Goals domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::amount::ensure_within_max;

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl Goal {
    /// Amount still missing to reach the target; negative once exceeded.
    pub fn remaining_amount(&self) -> Decimal {
        self.target_amount - self.current_amount
    }
}

/// Input model for creating a new goal. New goals start with a zero current amount.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub deadline: NaiveDate,
}

/// Fields a goal update may change. The current amount is not among them.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: String,
    pub target_amount: Decimal,
    pub deadline: NaiveDate,
}

fn validate_goal_fields(name: &str, target_amount: Decimal) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if target_amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "targetAmount must be greater than zero".to_string(),
        )
        .into());
    }
    ensure_within_max("targetAmount", target_amount)?;
    Ok(())
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(&self.name, self.target_amount)
    }
}

impl GoalUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(&self.name, self.target_amount)
    }
}
