//! BudgetBuddy Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the personal finance backend:
//! transaction recording with category checks, the advisory budget check,
//! ledger analytics and the savings forecast.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod analytics;
pub mod budgets;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod events;
pub mod forecast;
pub mod goals;
pub mod transactions;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
