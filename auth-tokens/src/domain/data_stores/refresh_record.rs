use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The single authoritative refresh token of a user.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshTokenRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What a sign-in hands to the store. The store decides the record id.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshGrant {
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub issued_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    pub fn from_grant(grant: RefreshGrant) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: grant.user_id,
            token: grant.token,
            expires_at: grant.expires_at,
            created_at: grant.issued_at,
            updated_at: grant.issued_at,
        }
    }

    /// Overwrite token and expiry in place, keeping id and creation time.
    pub fn replace_with(&mut self, grant: RefreshGrant) {
        self.token = grant.token;
        self.expires_at = grant.expires_at;
        self.updated_at = grant.issued_at;
    }
}
