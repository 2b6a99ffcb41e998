//! Database models for transactions.

use chrono::NaiveDate;
use diesel::prelude::*;

use budgetbuddy_core::transactions::{NewTransaction, Transaction, TransactionKind};

use crate::errors::StorageError;
use crate::utils::{decode_tags, encode_tags, parse_decimal};

/// Row of either `incomes` or `expenses`, in column order.
#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct TransactionDB {
    pub id: i64,
    pub user_id: i64,
    pub amount: String,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
    pub description: String,
    pub tags: String,
    pub date: NaiveDate,
    pub note: String,
}

impl TransactionDB {
    pub fn into_domain(self, kind: TransactionKind) -> Transaction {
        Transaction {
            id: self.id,
            user_id: self.user_id,
            kind,
            amount: parse_decimal(&self.amount, "amount"),
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            description: self.description,
            tags: decode_tags(&self.tags),
            date: self.date,
            note: self.note,
        }
    }
}

/// Column values for an insert into either table.
#[derive(Debug, Clone)]
pub struct NewTransactionDB {
    pub user_id: i64,
    pub amount: String,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
    pub description: String,
    pub tags: String,
    pub date: NaiveDate,
    pub note: String,
}

impl NewTransactionDB {
    pub fn from_domain(owner_id: i64, domain: NewTransaction) -> Result<Self, StorageError> {
        Ok(Self {
            user_id: owner_id,
            amount: domain.amount.to_string(),
            category_id: domain.category_id,
            subcategory_id: domain.subcategory_id,
            description: domain.description,
            tags: encode_tags(&domain.tags)?,
            date: domain.date,
            note: domain.note,
        })
    }
}
