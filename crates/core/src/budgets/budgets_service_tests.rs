#[cfg(test)]
mod tests {
    use crate::budgets::{
        Budget, BudgetRepositoryTrait, BudgetService, BudgetServiceTrait, BudgetStatus, NewBudget,
    };
    use crate::categories::{
        Category, CategoryKind, CategoryServiceTrait, CategoryWithSubcategories, NewCategory,
        NewSubcategory, Subcategory,
    };
    use crate::errors::{Error, ReferenceError, Result};
    use crate::transactions::{
        LedgerEntry, LedgerQuery, NewTransaction, Transaction, TransactionKind,
        TransactionRepositoryTrait,
    };
    use crate::constants::MAX_AMOUNT;
    use crate::utils::amount::checked_sum;
    use crate::utils::MonthKey;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock ledger ---
    #[derive(Default)]
    struct MockLedger {
        entries: Mutex<Vec<(i64, LedgerEntry)>>,
    }

    impl MockLedger {
        fn add_expense(&self, owner_id: i64, category_id: i64, date: &str, amount: Decimal) {
            self.entries.lock().unwrap().push((
                owner_id,
                LedgerEntry {
                    kind: TransactionKind::Expense,
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                    amount,
                    category_id,
                    category_name: format!("category-{category_id}"),
                },
            ));
        }
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockLedger {
        async fn insert_transaction(
            &self,
            _owner_id: i64,
            _new_transaction: NewTransaction,
        ) -> Result<Transaction> {
            unimplemented!()
        }

        fn get_transactions(
            &self,
            _owner_id: i64,
            _kind: TransactionKind,
        ) -> Result<Vec<Transaction>> {
            unimplemented!()
        }

        fn get_ledger_entries(
            &self,
            owner_id: i64,
            query: &LedgerQuery,
        ) -> Result<Vec<LedgerEntry>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|(owner, e)| *owner == owner_id && query.matches(e))
                .map(|(_, e)| e.clone())
                .collect())
        }

        fn sum_amounts(&self, owner_id: i64, query: &LedgerQuery) -> Result<Decimal> {
            checked_sum(
                self.get_ledger_entries(owner_id, query)?
                    .iter()
                    .map(|e| e.amount),
            )
        }
    }

    // --- Mock BudgetRepository ---
    #[derive(Default)]
    struct MockBudgetRepository {
        budgets: Mutex<Vec<Budget>>,
    }

    #[async_trait]
    impl BudgetRepositoryTrait for MockBudgetRepository {
        fn get_budget(
            &self,
            owner_id: i64,
            category_id: i64,
            month: MonthKey,
        ) -> Result<Option<Budget>> {
            Ok(self
                .budgets
                .lock()
                .unwrap()
                .iter()
                .find(|b| {
                    b.user_id == owner_id && b.category_id == category_id && b.month == month
                })
                .cloned())
        }

        fn get_budgets(&self, owner_id: i64, month: Option<MonthKey>) -> Result<Vec<Budget>> {
            Ok(self
                .budgets
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.user_id == owner_id && month.map_or(true, |m| b.month == m))
                .cloned()
                .collect())
        }

        async fn upsert_budget(&self, owner_id: i64, new_budget: NewBudget) -> Result<Budget> {
            let mut budgets = self.budgets.lock().unwrap();
            if let Some(existing) = budgets.iter_mut().find(|b| {
                b.user_id == owner_id
                    && b.category_id == new_budget.category_id
                    && b.month == new_budget.month
            }) {
                existing.amount = new_budget.amount;
                return Ok(existing.clone());
            }
            let budget = Budget {
                id: budgets.len() as i64 + 1,
                user_id: owner_id,
                category_id: new_budget.category_id,
                amount: new_budget.amount,
                month: new_budget.month,
                created_at: Utc::now().naive_utc(),
            };
            budgets.push(budget.clone());
            Ok(budget)
        }

        async fn delete_budget(&self, owner_id: i64, budget_id: i64) -> Result<usize> {
            let mut budgets = self.budgets.lock().unwrap();
            let before = budgets.len();
            budgets.retain(|b| !(b.user_id == owner_id && b.id == budget_id));
            Ok(before - budgets.len())
        }
    }

    // --- Mock CategoryService ---
    struct MockCategoryService;

    #[async_trait]
    impl CategoryServiceTrait for MockCategoryService {
        fn get_categories(&self, _kind: Option<CategoryKind>) -> Result<Vec<Category>> {
            unimplemented!()
        }

        fn get_categories_with_subcategories(
            &self,
            _kind: Option<CategoryKind>,
        ) -> Result<Vec<CategoryWithSubcategories>> {
            unimplemented!()
        }

        fn get_category(&self, id: i64) -> Result<Option<Category>> {
            Ok((id < 100).then(|| Category {
                id,
                name: format!("category-{id}"),
                kind: CategoryKind::Expense,
            }))
        }

        async fn create_category(&self, _new_category: NewCategory) -> Result<Category> {
            unimplemented!()
        }

        fn get_subcategories(&self, _category_id: i64) -> Result<Vec<Subcategory>> {
            unimplemented!()
        }

        fn get_subcategory(&self, _id: i64) -> Result<Option<Subcategory>> {
            unimplemented!()
        }

        async fn create_subcategory(
            &self,
            _new_subcategory: NewSubcategory,
        ) -> Result<Subcategory> {
            unimplemented!()
        }

        fn validate_references(
            &self,
            _category_id: i64,
            _subcategory_id: Option<i64>,
        ) -> Result<()> {
            unimplemented!()
        }
    }

    fn service() -> (BudgetService, Arc<MockLedger>) {
        let ledger = Arc::new(MockLedger::default());
        let service = BudgetService::new(
            Arc::new(MockBudgetRepository::default()),
            ledger.clone(),
            Arc::new(MockCategoryService),
        );
        (service, ledger)
    }

    fn month(raw: &str) -> MonthKey {
        MonthKey::parse(raw).unwrap()
    }

    #[test]
    fn check_without_budget_reports_zero_cap() {
        let (svc, ledger) = service();
        ledger.add_expense(1, 3, "2024-05-02", dec!(20));

        let status = svc.check_budget(1, 3, month("2024-05")).unwrap();
        assert_eq!(
            status,
            BudgetStatus {
                cap: Decimal::ZERO,
                spent: dec!(20)
            }
        );
        assert!(!status.would_exceed(dec!(1000000)));
    }

    #[tokio::test]
    async fn check_sums_only_matching_owner_category_and_month() {
        let (svc, ledger) = service();
        svc.save_budget(
            1,
            NewBudget {
                category_id: 3,
                amount: dec!(200),
                month: month("2024-05"),
            },
        )
        .await
        .unwrap();
        ledger.add_expense(1, 3, "2024-05-01", dec!(50));
        ledger.add_expense(1, 3, "2024-05-31", dec!(25.5));
        ledger.add_expense(1, 3, "2024-06-01", dec!(999));
        ledger.add_expense(1, 4, "2024-05-10", dec!(999));
        ledger.add_expense(2, 3, "2024-05-10", dec!(999));

        let status = svc.check_budget(1, 3, month("2024-05")).unwrap();
        assert_eq!(status.cap, dec!(200));
        assert_eq!(status.spent, dec!(75.5));
        assert!(status.would_exceed(dec!(124.51)));
        assert!(!status.would_exceed(dec!(124.5)));
    }

    #[test]
    fn repeated_checks_are_identical() {
        let (svc, ledger) = service();
        ledger.add_expense(1, 3, "2024-05-02", dec!(20));

        let first = svc.check_budget(1, 3, month("2024-05")).unwrap();
        let second = svc.check_budget(1, 3, month("2024-05")).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn save_budget_replaces_existing_cap() {
        let (svc, _) = service();
        let first = svc
            .save_budget(
                1,
                NewBudget {
                    category_id: 3,
                    amount: dec!(100),
                    month: month("2024-05"),
                },
            )
            .await
            .unwrap();
        let second = svc
            .save_budget(
                1,
                NewBudget {
                    category_id: 3,
                    amount: dec!(150),
                    month: month("2024-05"),
                },
            )
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        let budgets = svc.get_budgets(1, Some(month("2024-05"))).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, dec!(150));
    }

    #[tokio::test]
    async fn save_budget_validates_input() {
        let (svc, _) = service();
        let err = svc
            .save_budget(
                1,
                NewBudget {
                    category_id: 3,
                    amount: Decimal::ZERO,
                    month: month("2024-05"),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = svc
            .save_budget(
                1,
                NewBudget {
                    category_id: 500,
                    amount: dec!(10),
                    month: month("2024-05"),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Reference(ReferenceError::Category(500))));
    }

    #[tokio::test]
    async fn delete_budget_is_owner_scoped() {
        let (svc, _) = service();
        let budget = svc
            .save_budget(
                1,
                NewBudget {
                    category_id: 3,
                    amount: dec!(100),
                    month: month("2024-05"),
                },
            )
            .await
            .unwrap();

        let err = svc.delete_budget(2, budget.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        svc.delete_budget(1, budget.id).await.unwrap();
        assert!(svc.get_budgets(1, None).unwrap().is_empty());
    }

    #[tokio::test]
    async fn budget_vs_actual_reports_usage() {
        let (svc, ledger) = service();
        for (category_id, amount) in [(3, dec!(200)), (4, dec!(50))] {
            svc.save_budget(
                1,
                NewBudget {
                    category_id,
                    amount,
                    month: month("2024-05"),
                },
            )
            .await
            .unwrap();
        }
        ledger.add_expense(1, 3, "2024-05-03", dec!(50));
        ledger.add_expense(1, 4, "2024-05-04", dec!(75));

        let report = svc.get_budget_vs_actual(1, month("2024-05")).unwrap();
        assert_eq!(report.len(), 2);

        let food = report.iter().find(|r| r.category_id == 3).unwrap();
        assert_eq!(food.actual, dec!(50));
        assert_eq!(food.difference, dec!(150));
        assert_eq!(food.percent_used, dec!(25));
        assert!(!food.is_over_budget);

        let other = report.iter().find(|r| r.category_id == 4).unwrap();
        assert_eq!(other.category_name, "category-4");
        assert_eq!(other.percent_used, dec!(150));
        assert!(other.is_over_budget);
    }

    #[test]
    fn check_budget_reports_overflowing_spend_as_error() {
        let (svc, ledger) = service();
        let huge = dec!(50_000_000_000_000_000_000_000_000_000);
        ledger.add_expense(1, 3, "2024-05-01", huge);
        ledger.add_expense(1, 3, "2024-05-02", huge);

        assert!(matches!(
            svc.check_budget(1, 3, month("2024-05")),
            Err(Error::Unexpected(_))
        ));
    }

    #[test]
    fn would_exceed_saturates_near_the_maximum() {
        let status = BudgetStatus {
            cap: dec!(100),
            spent: Decimal::MAX,
        };
        assert!(status.would_exceed(Decimal::MAX));
        let warning = status.evaluate(3, month("2024-05"), Decimal::MAX).unwrap();
        assert_eq!(warning.projected_spent, Decimal::MAX);

        let uncapped = BudgetStatus {
            cap: Decimal::ZERO,
            spent: Decimal::MAX,
        };
        assert!(!uncapped.would_exceed(Decimal::MAX));
    }

    #[tokio::test]
    async fn save_budget_rejects_caps_above_the_maximum() {
        let (svc, _) = service();
        let err = svc
            .save_budget(
                1,
                NewBudget {
                    category_id: 3,
                    amount: MAX_AMOUNT + dec!(1),
                    month: month("2024-05"),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn budget_vs_actual_reports_unrepresentable_usage_as_error() {
        let (svc, ledger) = service();
        svc.save_budget(
            1,
            NewBudget {
                category_id: 3,
                amount: dec!(0.01),
                month: month("2024-05"),
            },
        )
        .await
        .unwrap();
        ledger.add_expense(
            1,
            3,
            "2024-05-03",
            dec!(50_000_000_000_000_000_000_000_000_000),
        );

        assert!(matches!(
            svc.get_budget_vs_actual(1, month("2024-05")),
            Err(Error::Unexpected(_))
        ));
    }
}
