//! SQLite storage implementation for BudgetBuddy.
//!
//! This crate is the only place where Diesel appears. It implements the repository
//! traits defined in `budgetbuddy-core` and contains:
//! - connection pooling and PRAGMA setup
//! - embedded migrations
//! - the single-writer actor all writes go through
//! - repository implementations and their Diesel row types
//!
//! ```text
//!   apps/server ──► budgetbuddy-core (traits, services)
//!        │                 ▲
//!        └──────► storage-sqlite (this crate) ──► SQLite file
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod budgets;
pub mod categories;
pub mod goals;
pub mod transactions;
pub mod users;

#[cfg(test)]
pub(crate) mod test_utils;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use budgetbuddy_core::errors::{DatabaseError, Error, Result};
