use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use budgetbuddy_core::transactions::{
    LedgerEntry, LedgerQuery, NewTransaction, Transaction, TransactionKind,
    TransactionRepositoryTrait,
};
use budgetbuddy_core::utils::amount::checked_sum;
use budgetbuddy_core::Result;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::categories;
use crate::utils::parse_decimal;

/// Expands `$body` once per ledger table, with `$t` bound to that table's schema module.
macro_rules! with_ledger_table {
    ($kind:expr, $t:ident => $body:expr) => {
        match $kind {
            TransactionKind::Income => {
                use crate::schema::incomes as $t;
                $body
            }
            TransactionKind::Expense => {
                use crate::schema::expenses as $t;
                $body
            }
        }
    };
}

const ALL_KINDS: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }

    fn load_ledger(
        conn: &mut SqliteConnection,
        kind: TransactionKind,
        owner_id: i64,
        query: &LedgerQuery,
    ) -> Result<Vec<LedgerEntry>> {
        let rows: Vec<(NaiveDate, String, i64, String)> = with_ledger_table!(kind, t => {
            let mut q = t::table
                .inner_join(categories::table)
                .filter(t::user_id.eq(owner_id))
                .select((t::date, t::amount, t::category_id, categories::name))
                .order((t::date.asc(), t::id.asc()))
                .into_boxed();
            if let Some(month) = query.month {
                q = q.filter(t::date.between(month.first_day(), month.last_day()));
            }
            if let Some(category_id) = query.category_id {
                q = q.filter(t::category_id.eq(category_id));
            }
            q.load(conn).into_core()?
        });

        Ok(rows
            .into_iter()
            .map(|(date, amount, category_id, category_name)| LedgerEntry {
                kind,
                date,
                amount: parse_decimal(&amount, "amount"),
                category_id,
                category_name,
            })
            .collect())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn insert_transaction(
        &self,
        owner_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        let kind = new_transaction.kind;
        let row = NewTransactionDB::from_domain(owner_id, new_transaction)?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let inserted: TransactionDB = with_ledger_table!(kind, t => {
                    diesel::insert_into(t::table)
                        .values((
                            t::user_id.eq(row.user_id),
                            t::amount.eq(row.amount),
                            t::category_id.eq(row.category_id),
                            t::subcategory_id.eq(row.subcategory_id),
                            t::description.eq(row.description),
                            t::tags.eq(row.tags),
                            t::date.eq(row.date),
                            t::note.eq(row.note),
                        ))
                        .get_result(conn)
                        .into_core()?
                });
                Ok(inserted.into_domain(kind))
            })
            .await
    }

    fn get_transactions(&self, owner_id: i64, kind: TransactionKind) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<TransactionDB> = with_ledger_table!(kind, t => {
            t::table
                .filter(t::user_id.eq(owner_id))
                .order((t::date.desc(), t::id.desc()))
                .load(&mut conn)
                .into_core()?
        });
        Ok(rows.into_iter().map(|r| r.into_domain(kind)).collect())
    }

    fn get_ledger_entries(&self, owner_id: i64, query: &LedgerQuery) -> Result<Vec<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let mut entries = Vec::new();
        for kind in ALL_KINDS {
            if query.kind.map_or(true, |k| k == kind) {
                entries.extend(Self::load_ledger(&mut conn, kind, owner_id, query)?);
            }
        }
        Ok(entries)
    }

    fn sum_amounts(&self, owner_id: i64, query: &LedgerQuery) -> Result<Decimal> {
        // Amounts are TEXT, so the sum happens in Decimal rather than in SQL.
        checked_sum(
            self.get_ledger_entries(owner_id, query)?
                .iter()
                .map(|e| e.amount),
        )
    }
}
