#[cfg(test)]
mod tests {
    use crate::analytics::{AnalyticsService, AnalyticsServiceTrait, CategorySpending};
    use crate::errors::{Error, Result};
    use crate::transactions::{
        LedgerEntry, LedgerQuery, NewTransaction, Transaction, TransactionKind,
        TransactionRepositoryTrait,
    };
    use crate::transactions::TransactionKind::{Expense, Income};
    use crate::utils::MonthKey;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    struct MockLedger {
        entries: Vec<(i64, LedgerEntry)>,
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
                .iter()
                .filter(|(owner, e)| *owner == owner_id && query.matches(e))
                .map(|(_, e)| e.clone())
                .collect())
        }

        fn sum_amounts(&self, _owner_id: i64, _query: &LedgerQuery) -> Result<Decimal> {
            unimplemented!()
        }
    }

    fn entry(kind: TransactionKind, date: &str, amount: Decimal, category: &str) -> LedgerEntry {
        LedgerEntry {
            kind,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            category_id: category.len() as i64,
            category_name: category.to_string(),
        }
    }

    fn service(entries: Vec<(i64, LedgerEntry)>) -> AnalyticsService {
        AnalyticsService::new(Arc::new(MockLedger { entries }))
    }

    #[test]
    fn spending_by_category_groups_and_sorts_by_name() {
        let svc = service(vec![
            (1, entry(Expense, "2024-03-02", dec!(10), "Transport")),
            (1, entry(Expense, "2024-03-09", dec!(15.25), "Food")),
            (1, entry(Expense, "2024-03-20", dec!(4.75), "Food")),
            (1, entry(Income, "2024-03-01", dec!(3000), "Salary")),
            (1, entry(Expense, "2024-04-01", dec!(99), "Food")),
            (2, entry(Expense, "2024-03-05", dec!(99), "Food")),
        ]);

        let result = svc
            .spending_by_category(1, MonthKey::parse("2024-03").unwrap())
            .unwrap();

        assert_eq!(
            result,
            vec![
                CategorySpending {
                    category: "Food".to_string(),
                    total: dec!(20),
                },
                CategorySpending {
                    category: "Transport".to_string(),
                    total: dec!(10),
                },
            ]
        );
    }

    #[test]
    fn spending_by_category_for_empty_month_is_empty() {
        let svc = service(vec![(1, entry(Expense, "2024-03-02", dec!(10), "Food"))]);
        let result = svc
            .spending_by_category(1, MonthKey::parse("2023-01").unwrap())
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn trends_are_ascending_without_gap_filling() {
        let svc = service(vec![
            (1, entry(Expense, "2024-05-10", dec!(40), "Food")),
            (1, entry(Income, "2024-01-31", dec!(1000), "Salary")),
            (1, entry(Expense, "2024-01-15", dec!(200), "Rent")),
            (1, entry(Income, "2023-12-31", dec!(500), "Salary")),
        ]);

        let trends = svc.income_expense_trends(1).unwrap();
        let months: Vec<String> = trends.iter().map(|t| t.month.to_string()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-05"]);

        assert_eq!(trends[1].income, dec!(1000));
        assert_eq!(trends[1].expense, dec!(200));
        assert_eq!(trends[2].income, Decimal::ZERO);
        assert_eq!(trends[2].expense, dec!(40));
    }

    #[test]
    fn same_weekday_expenses_are_averaged() {
        // 2024-06-03 and 2024-06-10 are both Mondays
        let svc = service(vec![
            (1, entry(Expense, "2024-06-03", dec!(10), "Food")),
            (1, entry(Expense, "2024-06-10", dec!(30), "Food")),
            (1, entry(Income, "2024-06-04", dec!(500), "Salary")),
        ]);

        let averages = svc.average_spending_by_day_of_week(1).unwrap();
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].day_of_week, 1);
        assert_eq!(averages[0].average_amount, dec!(20));
    }

    #[test]
    fn weekday_averages_are_ordered_from_sunday() {
        let svc = service(vec![
            (1, entry(Expense, "2024-06-08", dec!(5), "Food")),
            (1, entry(Expense, "2024-06-02", dec!(7), "Food")),
            (1, entry(Expense, "2024-06-05", dec!(10), "Food")),
            (1, entry(Expense, "2024-06-12", dec!(20), "Food")),
            (1, entry(Expense, "2024-06-19", dec!(30), "Food")),
        ]);

        let averages = svc.average_spending_by_day_of_week(1).unwrap();
        let days: Vec<u32> = averages.iter().map(|a| a.day_of_week).collect();
        assert_eq!(days, vec![0, 3, 6]);
        assert_eq!(averages[1].average_amount, dec!(20));
    }

    #[test]
    fn no_activity_yields_empty_results() {
        let svc = service(Vec::new());
        assert!(svc.income_expense_trends(1).unwrap().is_empty());
        assert!(svc.average_spending_by_day_of_week(1).unwrap().is_empty());
    }

    #[test]
    fn totals_past_the_decimal_range_are_errors() {
        let huge = dec!(50_000_000_000_000_000_000_000_000_000);
        let svc = service(vec![
            (1, entry(Expense, "2024-06-03", huge, "Food")),
            (1, entry(Expense, "2024-06-10", huge, "Food")),
        ]);

        assert!(matches!(
            svc.income_expense_trends(1),
            Err(Error::Unexpected(_))
        ));
        assert!(matches!(
            svc.spending_by_category(1, MonthKey::parse("2024-06").unwrap()),
            Err(Error::Unexpected(_))
        ));
        assert!(matches!(
            svc.average_spending_by_day_of_week(1),
            Err(Error::Unexpected(_))
        ));
    }

    #[test]
    fn amounts_near_the_maximum_still_aggregate_when_they_fit() {
        let half = Decimal::MAX / dec!(2);
        let svc = service(vec![
            (1, entry(Income, "2024-06-03", half, "Salary")),
            (1, entry(Expense, "2024-06-04", half, "Food")),
        ]);

        let trends = svc.income_expense_trends(1).unwrap();
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].income, half);
        assert_eq!(trends[0].expense, half);

        let averages = svc.average_spending_by_day_of_week(1).unwrap();
        assert_eq!(averages[0].average_amount, half.round_dp(6).normalize());
    }
}
