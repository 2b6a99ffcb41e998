//! Database models for budgets.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use budgetbuddy_core::budgets::{Budget, NewBudget};
use budgetbuddy_core::utils::MonthKey;
use budgetbuddy_core::Error;

use crate::utils::parse_decimal;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub amount: String,
    pub month: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
pub struct NewBudgetDB {
    pub user_id: i64,
    pub category_id: i64,
    pub amount: String,
    pub month: String,
    pub created_at: NaiveDateTime,
}

impl NewBudgetDB {
    pub fn from_domain(owner_id: i64, domain: NewBudget) -> Self {
        Self {
            user_id: owner_id,
            category_id: domain.category_id,
            amount: domain.amount.to_string(),
            month: domain.month.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl TryFrom<BudgetDB> for Budget {
    type Error = Error;

    fn try_from(db: BudgetDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            category_id: db.category_id,
            amount: parse_decimal(&db.amount, "budget amount"),
            month: MonthKey::parse(&db.month)?,
            created_at: db.created_at,
        })
    }
}
