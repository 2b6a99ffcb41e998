//! SQLite storage implementation for incomes and expenses.
//!
//! Each kind lives in its own table (`incomes`, `expenses`) with identical columns.

mod model;
mod repository;

pub use model::{NewTransactionDB, TransactionDB};
pub use repository::TransactionRepository;
