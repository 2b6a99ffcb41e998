//! Domain event types.

use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// Domain events emitted by core services after successful mutations.
///
/// Runtime adapters translate them into transport-specific pushes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// An income or expense was stored for `owner_id`.
    TransactionRecorded {
        owner_id: i64,
        transaction: Transaction,
    },
}

impl DomainEvent {
    pub fn transaction_recorded(owner_id: i64, transaction: Transaction) -> Self {
        Self::TransactionRecorded {
            owner_id,
            transaction,
        }
    }

    /// The user whose data changed.
    pub fn owner_id(&self) -> i64 {
        match self {
            DomainEvent::TransactionRecorded { owner_id, .. } => *owner_id,
        }
    }
}
