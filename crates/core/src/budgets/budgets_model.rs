//! Budget domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::amount::ensure_within_max;
use crate::utils::MonthKey;

/// Monthly spending cap for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: Decimal,
    pub month: MonthKey,
    pub created_at: NaiveDateTime,
}

/// Input model for saving a budget. Saving the same (category, month) twice replaces the cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category_id: i64,
    pub amount: Decimal,
    pub month: MonthKey,
}

impl NewBudget {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "budget amount must be greater than zero".to_string(),
            )
            .into());
        }
        ensure_within_max("budget amount", self.amount)?;
        if self.category_id <= 0 {
            return Err(ValidationError::MissingField("categoryId".to_string()).into());
        }
        Ok(())
    }
}

/// Cap and month-to-date spend of one (owner, category, month).
///
/// `cap` is zero when no budget is configured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub cap: Decimal,
    pub spent: Decimal,
}

impl BudgetStatus {
    pub fn has_cap(&self) -> bool {
        self.cap > Decimal::ZERO
    }

    /// Spend after adding `amount`, saturating at `Decimal::MAX`.
    fn projected(&self, amount: Decimal) -> Decimal {
        self.spent.saturating_add(amount)
    }

    pub fn would_exceed(&self, amount: Decimal) -> bool {
        self.has_cap() && self.projected(amount) > self.cap
    }

    pub fn evaluate(
        &self,
        category_id: i64,
        month: MonthKey,
        amount: Decimal,
    ) -> Option<BudgetWarning> {
        self.would_exceed(amount).then(|| BudgetWarning {
            category_id,
            month,
            cap: self.cap,
            projected_spent: self.projected(amount),
        })
    }
}

/// Reported when an expense takes its category over the monthly cap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetWarning {
    pub category_id: i64,
    pub month: MonthKey,
    pub cap: Decimal,
    pub projected_spent: Decimal,
}

/// Budget compared with the month's actual spending in its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVsActual {
    pub budget_id: i64,
    pub category_id: i64,
    pub category_name: String,
    pub month: MonthKey,
    pub budgeted: Decimal,
    pub actual: Decimal,
    pub difference: Decimal,
    pub percent_used: Decimal,
    pub is_over_budget: bool,
}
