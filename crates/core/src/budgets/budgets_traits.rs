use async_trait::async_trait;

use crate::budgets::budgets_model::{Budget, BudgetStatus, BudgetVsActual, NewBudget};
use crate::errors::Result;
use crate::utils::MonthKey;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget(
        &self,
        owner_id: i64,
        category_id: i64,
        month: MonthKey,
    ) -> Result<Option<Budget>>;
    fn get_budgets(&self, owner_id: i64, month: Option<MonthKey>) -> Result<Vec<Budget>>;
    /// Inserts, or replaces the amount of the existing (owner, category, month) row.
    async fn upsert_budget(&self, owner_id: i64, new_budget: NewBudget) -> Result<Budget>;
    async fn delete_budget(&self, owner_id: i64, budget_id: i64) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Read-only; repeated calls without intervening writes return the same status.
    fn check_budget(&self, owner_id: i64, category_id: i64, month: MonthKey)
        -> Result<BudgetStatus>;
    fn get_budgets(&self, owner_id: i64, month: Option<MonthKey>) -> Result<Vec<Budget>>;
    fn get_budget_vs_actual(&self, owner_id: i64, month: MonthKey) -> Result<Vec<BudgetVsActual>>;
    async fn save_budget(&self, owner_id: i64, new_budget: NewBudget) -> Result<Budget>;
    async fn delete_budget(&self, owner_id: i64, budget_id: i64) -> Result<()>;
}
