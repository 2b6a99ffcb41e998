use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::analytics_model::{CategorySpending, DayOfWeekAverage, MonthlyTrend};
use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::transactions::{LedgerEntry, LedgerQuery, TransactionKind, TransactionRepositoryTrait};
use crate::utils::amount::{checked_add, checked_div};
use crate::utils::time_utils::day_of_week_index;
use crate::utils::MonthKey;

/// Read-only aggregations over one owner's ledger.
///
/// Totals that leave the `Decimal` range fail with `Error::Unexpected`.
pub trait AnalyticsServiceTrait: Send + Sync {
    fn spending_by_category(
        &self,
        owner_id: i64,
        month: MonthKey,
    ) -> Result<Vec<CategorySpending>>;
    fn income_expense_trends(&self, owner_id: i64) -> Result<Vec<MonthlyTrend>>;
    fn average_spending_by_day_of_week(&self, owner_id: i64) -> Result<Vec<DayOfWeekAverage>>;
}

pub struct AnalyticsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        AnalyticsService {
            transaction_repository,
        }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn spending_by_category(
        &self,
        owner_id: i64,
        month: MonthKey,
    ) -> Result<Vec<CategorySpending>> {
        debug!("Spending by category for user {} in {}", owner_id, month);
        let entries = self
            .transaction_repository
            .get_ledger_entries(owner_id, &LedgerQuery::expenses().in_month(month))?;
        aggregate_spending_by_category(&entries)
    }

    fn income_expense_trends(&self, owner_id: i64) -> Result<Vec<MonthlyTrend>> {
        let entries = self
            .transaction_repository
            .get_ledger_entries(owner_id, &LedgerQuery::default())?;
        aggregate_monthly_trends(&entries)
    }

    fn average_spending_by_day_of_week(&self, owner_id: i64) -> Result<Vec<DayOfWeekAverage>> {
        let entries = self
            .transaction_repository
            .get_ledger_entries(owner_id, &LedgerQuery::expenses())?;
        aggregate_day_of_week_averages(&entries)
    }
}

/// Sums expenses per category name, ordered by name. Income entries are ignored.
pub fn aggregate_spending_by_category(entries: &[LedgerEntry]) -> Result<Vec<CategorySpending>> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|e| e.kind == TransactionKind::Expense)
    {
        let total = totals
            .entry(entry.category_name.as_str())
            .or_insert(Decimal::ZERO);
        *total = checked_add(*total, entry.amount)?;
    }
    Ok(totals
        .into_iter()
        .map(|(category, total)| CategorySpending {
            category: category.to_string(),
            total,
        })
        .collect())
}

/// One row per month with activity on either side, ascending. Empty months are not filled.
pub fn aggregate_monthly_trends(entries: &[LedgerEntry]) -> Result<Vec<MonthlyTrend>> {
    let mut months: BTreeMap<MonthKey, (Decimal, Decimal)> = BTreeMap::new();
    for entry in entries {
        let (income, expense) = months
            .entry(MonthKey::from_date(entry.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match entry.kind {
            TransactionKind::Income => *income = checked_add(*income, entry.amount)?,
            TransactionKind::Expense => *expense = checked_add(*expense, entry.amount)?,
        }
    }
    Ok(months
        .into_iter()
        .map(|(month, (income, expense))| MonthlyTrend {
            month,
            income,
            expense,
        })
        .collect())
}

/// Mean expense per weekday over all time; weekdays without expenses are omitted.
pub fn aggregate_day_of_week_averages(entries: &[LedgerEntry]) -> Result<Vec<DayOfWeekAverage>> {
    let mut days: BTreeMap<u32, (Decimal, u32)> = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|e| e.kind == TransactionKind::Expense)
    {
        let (sum, count) = days
            .entry(day_of_week_index(entry.date))
            .or_insert((Decimal::ZERO, 0));
        *sum = checked_add(*sum, entry.amount)?;
        *count += 1;
    }
    days.into_iter()
        .map(|(day_of_week, (sum, count))| {
            let average = checked_div(sum, Decimal::from(count))?;
            Ok(DayOfWeekAverage {
                day_of_week,
                average_amount: average.round_dp(DECIMAL_PRECISION).normalize(),
            })
        })
        .collect()
}
