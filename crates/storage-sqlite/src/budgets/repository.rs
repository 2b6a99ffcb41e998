use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use budgetbuddy_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use budgetbuddy_core::utils::MonthKey;
use budgetbuddy_core::Result;

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budget(
        &self,
        owner_id: i64,
        category_id: i64,
        month: MonthKey,
    ) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        budgets::table
            .filter(budgets::user_id.eq(owner_id))
            .filter(budgets::category_id.eq(category_id))
            .filter(budgets::month.eq(month.to_string()))
            .select(BudgetDB::as_select())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Budget::try_from)
            .transpose()
    }

    fn get_budgets(&self, owner_id: i64, month: Option<MonthKey>) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = budgets::table
            .filter(budgets::user_id.eq(owner_id))
            .select(BudgetDB::as_select())
            .order((budgets::month.asc(), budgets::category_id.asc()))
            .into_boxed();
        if let Some(month) = month {
            query = query.filter(budgets::month.eq(month.to_string()));
        }
        query
            .load::<BudgetDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Budget::try_from)
            .collect()
    }

    /// One budget per (owner, category, month); saving again replaces the amount.
    async fn upsert_budget(&self, owner_id: i64, new_budget: NewBudget) -> Result<Budget> {
        let row = NewBudgetDB::from_domain(owner_id, new_budget);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let existing = budgets::table
                    .filter(budgets::user_id.eq(row.user_id))
                    .filter(budgets::category_id.eq(row.category_id))
                    .filter(budgets::month.eq(&row.month))
                    .select(budgets::id)
                    .first::<i64>(conn)
                    .optional()
                    .into_core()?;

                let saved = match existing {
                    Some(budget_id) => diesel::update(budgets::table.find(budget_id))
                        .set(budgets::amount.eq(&row.amount))
                        .returning(BudgetDB::as_returning())
                        .get_result(conn)
                        .into_core()?,
                    None => diesel::insert_into(budgets::table)
                        .values(&row)
                        .returning(BudgetDB::as_returning())
                        .get_result(conn)
                        .into_core()?,
                };
                Budget::try_from(saved)
            })
            .await
    }

    async fn delete_budget(&self, owner_id: i64, budget_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    budgets::table
                        .filter(budgets::id.eq(budget_id))
                        .filter(budgets::user_id.eq(owner_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}
