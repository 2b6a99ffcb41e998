use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations. Every call is scoped to one owner.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self, owner_id: i64) -> Result<Vec<Goal>>;
    fn get_goal(&self, owner_id: i64, goal_id: i64) -> Result<Option<Goal>>;
    async fn insert_new_goal(&self, owner_id: i64, new_goal: NewGoal) -> Result<Goal>;
    /// Returns `None` when no goal with that id belongs to the owner.
    async fn update_goal(
        &self,
        owner_id: i64,
        goal_id: i64,
        goal_update: GoalUpdate,
    ) -> Result<Option<Goal>>;
    async fn delete_goal(&self, owner_id: i64, goal_id: i64) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, owner_id: i64) -> Result<Vec<Goal>>;
    fn get_goal(&self, owner_id: i64, goal_id: i64) -> Result<Goal>;
    async fn create_goal(&self, owner_id: i64, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, owner_id: i64, goal_id: i64, goal_update: GoalUpdate)
        -> Result<Goal>;
    async fn delete_goal(&self, owner_id: i64, goal_id: i64) -> Result<()>;
}
