use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::budgets::budgets_model::{Budget, BudgetStatus, BudgetVsActual, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::categories::CategoryServiceTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, ReferenceError, Result};
use crate::transactions::{LedgerQuery, TransactionRepositoryTrait};
use crate::utils::amount::{checked_add, checked_div, checked_mul, checked_sub};
use crate::utils::MonthKey;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
    ) -> Self {
        Self {
            repository,
            transaction_repository,
            category_service,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn check_budget(
        &self,
        owner_id: i64,
        category_id: i64,
        month: MonthKey,
    ) -> Result<BudgetStatus> {
        let spent = self.transaction_repository.sum_amounts(
            owner_id,
            &LedgerQuery::expenses()
                .in_month(month)
                .for_category(category_id),
        )?;
        let cap = self
            .repository
            .get_budget(owner_id, category_id, month)?
            .map(|b| b.amount)
            .unwrap_or(Decimal::ZERO);
        Ok(BudgetStatus { cap, spent })
    }

    fn get_budgets(&self, owner_id: i64, month: Option<MonthKey>) -> Result<Vec<Budget>> {
        self.repository.get_budgets(owner_id, month)
    }

    fn get_budget_vs_actual(
        &self,
        owner_id: i64,
        month: MonthKey,
    ) -> Result<Vec<BudgetVsActual>> {
        let budgets = self.repository.get_budgets(owner_id, Some(month))?;
        let entries = self
            .transaction_repository
            .get_ledger_entries(owner_id, &LedgerQuery::expenses().in_month(month))?;

        let mut spent_by_category: HashMap<i64, Decimal> = HashMap::new();
        let mut names: HashMap<i64, String> = HashMap::new();
        for entry in entries {
            let spent = spent_by_category
                .entry(entry.category_id)
                .or_insert(Decimal::ZERO);
            *spent = checked_add(*spent, entry.amount)?;
            names.entry(entry.category_id).or_insert(entry.category_name);
        }

        budgets
            .into_iter()
            .map(|budget| {
                let category_name = match names.get(&budget.category_id) {
                    Some(name) => name.clone(),
                    None => self
                        .category_service
                        .get_category(budget.category_id)?
                        .map(|c| c.name)
                        .unwrap_or_default(),
                };
                let actual = spent_by_category
                    .get(&budget.category_id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let percent_used = if budget.amount > Decimal::ZERO {
                    let ratio = checked_div(actual, budget.amount)?;
                    checked_mul(ratio, Decimal::ONE_HUNDRED)?.round_dp(DISPLAY_DECIMAL_PRECISION)
                } else {
                    Decimal::ZERO
                };
                Ok(BudgetVsActual {
                    budget_id: budget.id,
                    category_id: budget.category_id,
                    category_name,
                    month: budget.month,
                    budgeted: budget.amount,
                    actual,
                    difference: checked_sub(budget.amount, actual)?,
                    percent_used,
                    is_over_budget: actual > budget.amount,
                })
            })
            .collect()
    }

    async fn save_budget(&self, owner_id: i64, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        if self
            .category_service
            .get_category(new_budget.category_id)?
            .is_none()
        {
            return Err(ReferenceError::Category(new_budget.category_id).into());
        }
        debug!(
            "Saving budget of {} for user {} category {} in {}",
            new_budget.amount, owner_id, new_budget.category_id, new_budget.month
        );
        self.repository.upsert_budget(owner_id, new_budget).await
    }

    async fn delete_budget(&self, owner_id: i64, budget_id: i64) -> Result<()> {
        let deleted = self.repository.delete_budget(owner_id, budget_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("budget {budget_id}")));
        }
        Ok(())
    }
}
