use async_trait::async_trait;

use crate::errors::Result;
use crate::users::users_model::{NewUser, User};

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, id: i64) -> Result<Option<User>>;
    fn get_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn create(&self, new_user: NewUser) -> Result<User>;
    /// Returns the number of updated rows.
    async fn update_name(&self, id: i64, name: String) -> Result<usize>;
    async fn update_password_hash(&self, id: i64, password_hash: String) -> Result<usize>;
}

#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Fails with `ConstraintViolation` when the email is already registered.
    async fn register(&self, new_user: NewUser) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn get_user(&self, id: i64) -> Result<User>;
    async fn update_name(&self, id: i64, name: String) -> Result<User>;
    async fn update_password_hash(&self, id: i64, password_hash: String) -> Result<()>;
}
