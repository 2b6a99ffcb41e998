//! SQLite storage implementation for monthly category budgets.

mod model;
mod repository;

pub use model::{BudgetDB, NewBudgetDB};
pub use repository::BudgetRepository;
