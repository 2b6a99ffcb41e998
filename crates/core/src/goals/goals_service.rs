use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Error, Result};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

fn goal_not_found(goal_id: i64) -> Error {
    Error::NotFound(format!("goal {goal_id}"))
}

#[async_trait]
impl<T: GoalRepositoryTrait + Send + Sync> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self, owner_id: i64) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals(owner_id)
    }

    fn get_goal(&self, owner_id: i64, goal_id: i64) -> Result<Goal> {
        self.goal_repo
            .get_goal(owner_id, goal_id)?
            .ok_or_else(|| goal_not_found(goal_id))
    }

    async fn create_goal(&self, owner_id: i64, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        let new_goal = NewGoal {
            name: new_goal.name.trim().to_string(),
            ..new_goal
        };
        self.goal_repo.insert_new_goal(owner_id, new_goal).await
    }

    async fn update_goal(
        &self,
        owner_id: i64,
        goal_id: i64,
        goal_update: GoalUpdate,
    ) -> Result<Goal> {
        goal_update.validate()?;
        let goal_update = GoalUpdate {
            name: goal_update.name.trim().to_string(),
            ..goal_update
        };
        self.goal_repo
            .update_goal(owner_id, goal_id, goal_update)
            .await?
            .ok_or_else(|| goal_not_found(goal_id))
    }

    async fn delete_goal(&self, owner_id: i64, goal_id: i64) -> Result<()> {
        match self.goal_repo.delete_goal(owner_id, goal_id).await? {
            0 => Err(goal_not_found(goal_id)),
            _ => Ok(()),
        }
    }
}
