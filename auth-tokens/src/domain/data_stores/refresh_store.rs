use thiserror::Error;
use uuid::Uuid;

use super::{RefreshGrant, RefreshTokenRecord};

#[derive(Error, Debug, PartialEq)]
pub enum RefreshStoreError {
    #[error("refresh token store unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt refresh token record: {0}")]
    Corrupt(String),
}

/// Durable one-row-per-user refresh token table.
///
/// `upsert` must be atomic per user: two concurrent calls for the same user leave exactly
/// one record holding one of the two tokens.
#[async_trait::async_trait]
pub trait RefreshStore: Send + Sync {
    async fn upsert(&self, grant: RefreshGrant) -> Result<RefreshTokenRecord, RefreshStoreError>;

    /// Exact match on both user id and token string.
    async fn find(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, RefreshStoreError>;
}
