use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email.as_ref().to_owned(),
            created_at: user.created_at,
        }
    }
}
