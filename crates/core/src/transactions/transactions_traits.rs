use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::transactions::transactions_model::{
    LedgerEntry, LedgerQuery, NewTransaction, RecordedTransaction, Transaction, TransactionKind,
};

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn insert_transaction(
        &self,
        owner_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;

    fn get_transactions(&self, owner_id: i64, kind: TransactionKind) -> Result<Vec<Transaction>>;

    /// Ledger rows of one owner, joined with their category names.
    fn get_ledger_entries(&self, owner_id: i64, query: &LedgerQuery) -> Result<Vec<LedgerEntry>>;

    /// Sum of amounts matching `query`; zero when nothing matches.
    fn sum_amounts(&self, owner_id: i64, query: &LedgerQuery) -> Result<Decimal>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn record_transaction(
        &self,
        owner_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<RecordedTransaction>;

    fn get_transactions(&self, owner_id: i64, kind: TransactionKind) -> Result<Vec<Transaction>>;
}
