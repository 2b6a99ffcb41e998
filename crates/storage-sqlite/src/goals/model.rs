//! Database models for goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use budgetbuddy_core::goals::{Goal, NewGoal};

use crate::utils::parse_decimal;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub user_id: i64,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            target_amount: parse_decimal(&db.target_amount, "target_amount"),
            current_amount: parse_decimal(&db.current_amount, "current_amount"),
            deadline: db.deadline,
            created_at: db.created_at,
        }
    }
}

impl NewGoalDB {
    /// New goals start with nothing saved.
    pub fn from_domain(owner_id: i64, domain: NewGoal) -> Self {
        Self {
            user_id: owner_id,
            name: domain.name,
            target_amount: domain.target_amount.to_string(),
            current_amount: "0".to_string(),
            deadline: domain.deadline,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
