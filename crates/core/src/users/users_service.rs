use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::{DatabaseError, Error, Result};
use crate::users::users_model::{normalize_email, validate_name, NewUser, User};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

fn user_not_found(id: i64) -> Error {
    Error::NotFound(format!("user {id}"))
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let new_user = NewUser {
            email: normalize_email(&new_user.email),
            name: new_user.name.trim().to_string(),
            password_hash: new_user.password_hash,
        };

        if self.repository.get_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(
                "a user with this email already exists".to_string(),
            ));
        }

        // A concurrent registration can still hit the unique index.
        let user = self.repository.create(new_user).await.map_err(|e| match e {
            Error::Database(DatabaseError::UniqueViolation(_)) => Error::ConstraintViolation(
                "a user with this email already exists".to_string(),
            ),
            other => other,
        })?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.get_by_email(&normalize_email(email))
    }

    fn get_user(&self, id: i64) -> Result<User> {
        self.repository
            .get_by_id(id)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn update_name(&self, id: i64, name: String) -> Result<User> {
        validate_name(&name)?;
        if self
            .repository
            .update_name(id, name.trim().to_string())
            .await?
            == 0
        {
            return Err(user_not_found(id));
        }
        self.get_user(id)
    }

    async fn update_password_hash(&self, id: i64, password_hash: String) -> Result<()> {
        if self.repository.update_password_hash(id, password_hash).await? == 0 {
            return Err(user_not_found(id));
        }
        Ok(())
    }
}
