use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity embedded in an access token under `userData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Access token payload: `{"userData": {...}, "exp": <epoch seconds>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(rename = "userData")]
    pub user_data: UserData,
    pub exp: i64,
}

/// Refresh token payload: `{"id": "<uuid>", "exp": <epoch seconds>, "jti": "<uuid>"}`.
/// `jti` is fresh per issue, so two sign-ins within one second still get distinct tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub id: Uuid,
    pub exp: i64,
    pub jti: Uuid,
}

/// Anything carrying an `exp` claim.
pub trait Expiring {
    fn expires_at(&self) -> i64;
}

impl Expiring for AccessClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

impl Expiring for RefreshClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}
