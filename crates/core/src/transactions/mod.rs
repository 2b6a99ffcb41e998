//! Transactions module - income/expense recording and ledger reads.

mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub use transactions_model::{
    LedgerEntry, LedgerQuery, NewTransaction, RecordedTransaction, Transaction, TransactionKind,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
