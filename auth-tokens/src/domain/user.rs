use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Email;

/// A registered account as seen by the token lifecycle.
#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        first_name: String,
        last_name: String,
        email: Email,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        User {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
