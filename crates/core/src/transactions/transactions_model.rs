//! Transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::BudgetWarning;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::amount::ensure_within_max;
use crate::utils::MonthKey;

/// Income or expense. Each kind is stored in its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "transaction type must be 'income' or 'expense', got '{other}'"
            )))),
        }
    }
}

/// A recorded income or expense. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
    pub description: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub note: String,
}

/// Input model for recording a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "amount must be greater than zero".to_string(),
            )
            .into());
        }
        ensure_within_max("amount", self.amount)?;
        if self.category_id <= 0 {
            return Err(ValidationError::MissingField("categoryId".to_string()).into());
        }
        if matches!(self.subcategory_id, Some(id) if id <= 0) {
            return Err(ValidationError::InvalidInput(
                "subcategoryId must be a positive identifier".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Trims tags and drops empty ones.
    pub fn normalized(mut self) -> Self {
        self.tags = self
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self.description = self.description.trim().to_string();
        self
    }
}

/// Outcome of recording a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordedTransaction {
    pub transaction: Transaction,
    /// Present when an expense pushed its category over the month's budget.
    pub budget_warning: Option<BudgetWarning>,
}

/// Flattened ledger row used by budgets and analytics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category_id: i64,
    pub category_name: String,
}

/// Filter for ledger reads. `None` fields are not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerQuery {
    pub kind: Option<TransactionKind>,
    pub month: Option<MonthKey>,
    pub category_id: Option<i64>,
}

impl LedgerQuery {
    pub fn expenses() -> Self {
        Self {
            kind: Some(TransactionKind::Expense),
            ..Default::default()
        }
    }

    pub fn in_month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    pub fn for_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        self.kind.map_or(true, |k| k == entry.kind)
            && self.month.map_or(true, |m| m.contains(entry.date))
            && self.category_id.map_or(true, |c| c == entry.category_id)
    }
}
