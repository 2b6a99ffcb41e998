use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use budgetbuddy_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use budgetbuddy_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self, owner_id: i64) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .filter(goals::user_id.eq(owner_id))
            .order((goals::deadline.asc(), goals::id.asc()))
            .select(GoalDB::as_select())
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn get_goal(&self, owner_id: i64, goal_id: i64) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .filter(goals::id.eq(goal_id))
            .filter(goals::user_id.eq(owner_id))
            .select(GoalDB::as_select())
            .first::<GoalDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Goal::from))
    }

    async fn insert_new_goal(&self, owner_id: i64, new_goal: NewGoal) -> Result<Goal> {
        let row = NewGoalDB::from_domain(owner_id, new_goal);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let result_db = diesel::insert_into(goals::table)
                    .values(&row)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    /// `None` when the goal does not exist or belongs to someone else.
    async fn update_goal(
        &self,
        owner_id: i64,
        goal_id: i64,
        goal_update: GoalUpdate,
    ) -> Result<Option<Goal>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Goal>> {
                let updated = diesel::update(
                    goals::table
                        .filter(goals::id.eq(goal_id))
                        .filter(goals::user_id.eq(owner_id)),
                )
                .set((
                    goals::name.eq(goal_update.name),
                    goals::target_amount.eq(goal_update.target_amount.to_string()),
                    goals::deadline.eq(goal_update.deadline),
                ))
                .returning(GoalDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?;
                Ok(updated.map(Goal::from))
            })
            .await
    }

    async fn delete_goal(&self, owner_id: i64, goal_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    goals::table
                        .filter(goals::id.eq(goal_id))
                        .filter(goals::user_id.eq(owner_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_user, setup_db};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn new_goal(name: &str, target: Decimal) -> NewGoal {
        NewGoal {
            name: name.to_string(),
            target_amount: target,
            deadline: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_starts_with_zero_saved() {
        let db = setup_db();
        let owner = seed_user(&db, "goal@example.com");
        let repo = GoalRepository::new(db.pool.clone(), db.writer.clone());

        let goal = repo
            .insert_new_goal(owner, new_goal("Bike", dec!(899.99)))
            .await
            .unwrap();
        assert_eq!(goal.current_amount, Decimal::ZERO);
        assert_eq!(goal.target_amount, dec!(899.99));
        assert_eq!(repo.load_goals(owner).unwrap(), vec![goal]);
    }

    #[tokio::test]
    async fn update_and_delete_respect_owner() {
        let db = setup_db();
        let owner = seed_user(&db, "mine@example.com");
        let other = seed_user(&db, "theirs@example.com");
        let repo = GoalRepository::new(db.pool.clone(), db.writer.clone());
        let goal = repo
            .insert_new_goal(owner, new_goal("Trip", dec!(2000)))
            .await
            .unwrap();

        let update = GoalUpdate {
            name: "Long trip".to_string(),
            target_amount: dec!(3000),
            deadline: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        };
        assert!(repo
            .update_goal(other, goal.id, update.clone())
            .await
            .unwrap()
            .is_none());

        let updated = repo
            .update_goal(owner, goal.id, update)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Long trip");
        assert_eq!(updated.target_amount, dec!(3000));
        assert_eq!(updated.current_amount, Decimal::ZERO);

        assert!(repo.get_goal(other, goal.id).unwrap().is_none());
        assert_eq!(repo.delete_goal(other, goal.id).await.unwrap(), 0);
        assert_eq!(repo.delete_goal(owner, goal.id).await.unwrap(), 1);
        assert!(repo.get_goal(owner, goal.id).unwrap().is_none());
    }
}
