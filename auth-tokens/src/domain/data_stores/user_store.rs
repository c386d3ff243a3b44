use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Email, User};

#[derive(Error, Debug, PartialEq)]
pub enum UserStoreError {
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("user store unavailable: {0}")]
    Unavailable(String),
    #[error("invalid user data: {0}")]
    InvalidData(String),
}

/// Persistent user directory.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError>;
}
