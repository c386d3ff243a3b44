use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freshly signed token and the `exp` it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a successful refresh. Only the access token is renewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
}

/// Identity recovered from a verified, non-revoked access token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// `exp` of the presented token, needed to build its denylist key.
    pub expires_at: i64,
    /// The raw token as presented.
    pub token: String,
}
