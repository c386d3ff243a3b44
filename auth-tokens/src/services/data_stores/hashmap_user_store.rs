use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Email, User, UserStore, UserStoreError};

/// In-memory user directory keyed by user id. Email uniqueness is enforced on insert.
#[derive(Default)]
pub struct HashmapUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.email == user.email || u.id == user.id)
        {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}
