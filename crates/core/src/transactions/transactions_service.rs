use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};

use crate::budgets::{BudgetServiceTrait, BudgetWarning};
use crate::categories::CategoryServiceTrait;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::transactions::transactions_model::{
    NewTransaction, RecordedTransaction, Transaction, TransactionKind,
};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};
use crate::utils::MonthKey;

/// Records incomes and expenses after validating their category references.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            category_service,
            budget_service,
            event_sink,
        }
    }

    /// Advisory check: never blocks the write. A failing lookup is logged and skipped.
    fn evaluate_budget(
        &self,
        owner_id: i64,
        new_transaction: &NewTransaction,
    ) -> Option<BudgetWarning> {
        let month = MonthKey::from_date(new_transaction.date);
        match self
            .budget_service
            .check_budget(owner_id, new_transaction.category_id, month)
        {
            Ok(status) => {
                let warning = status.evaluate(
                    new_transaction.category_id,
                    month,
                    new_transaction.amount,
                );
                if let Some(w) = &warning {
                    warn!(
                        "Budget exceeded for user {} category {} in {}: cap {}, projected spend {}",
                        owner_id, w.category_id, w.month, w.cap, w.projected_spent
                    );
                }
                warning
            }
            Err(e) => {
                error!(
                    "Budget check failed for user {} category {}: {}",
                    owner_id, new_transaction.category_id, e
                );
                None
            }
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn record_transaction(
        &self,
        owner_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<RecordedTransaction> {
        let new_transaction = new_transaction.normalized();
        new_transaction.validate()?;
        self.category_service
            .validate_references(new_transaction.category_id, new_transaction.subcategory_id)?;

        let budget_warning = match new_transaction.kind {
            TransactionKind::Expense => self.evaluate_budget(owner_id, &new_transaction),
            TransactionKind::Income => None,
        };

        let transaction = self
            .repository
            .insert_transaction(owner_id, new_transaction)
            .await?;
        debug!(
            "Recorded {} {} for user {}",
            transaction.kind, transaction.id, owner_id
        );

        self.event_sink
            .emit(DomainEvent::transaction_recorded(owner_id, transaction.clone()));

        Ok(RecordedTransaction {
            transaction,
            budget_warning,
        })
    }

    fn get_transactions(&self, owner_id: i64, kind: TransactionKind) -> Result<Vec<Transaction>> {
        self.repository.get_transactions(owner_id, kind)
    }
}
