use thiserror::Error;

use crate::domain::{PasswordHashError, RefreshStoreError, RevocationStoreError, UserStoreError};

/// Every outcome of a token lifecycle call other than success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email address is already in use")]
    EmailInUse,

    #[error("malformed token")]
    MalformedToken,

    #[error("token signature mismatch")]
    BadSignature,

    #[error("token has expired")]
    ExpiredToken,

    #[error("invalid refresh token")]
    InvalidRefreshToken,

    #[error("refresh token expired")]
    RefreshTokenExpired,

    #[error("token has been revoked")]
    Revoked,

    #[error("user not found")]
    UserNotFound,

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("signing failed: {0}")]
    SigningError(String),

    #[error("operation cancelled before completion")]
    OperationCancelled,
}

impl AuthError {
    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::EmailInUse => "email_in_use",
            AuthError::MalformedToken => "malformed_token",
            AuthError::BadSignature => "bad_signature",
            AuthError::ExpiredToken => "expired_token",
            AuthError::InvalidRefreshToken => "invalid_refresh_token",
            AuthError::RefreshTokenExpired => "refresh_token_expired",
            AuthError::Revoked => "revoked",
            AuthError::UserNotFound => "user_not_found",
            AuthError::StoreUnavailable(_) => "store_unavailable",
            AuthError::SigningError(_) => "signing_error",
            AuthError::OperationCancelled => "operation_cancelled",
        }
    }

    /// Failures of the service itself rather than of the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthError::StoreUnavailable(_) | AuthError::SigningError(_)
        )
    }
}

impl From<RevocationStoreError> for AuthError {
    fn from(e: RevocationStoreError) -> Self {
        match e {
            RevocationStoreError::Unavailable(msg) => AuthError::StoreUnavailable(msg),
        }
    }
}

impl From<RefreshStoreError> for AuthError {
    fn from(e: RefreshStoreError) -> Self {
        AuthError::StoreUnavailable(e.to_string())
    }
}

impl From<UserStoreError> for AuthError {
    fn from(e: UserStoreError) -> Self {
        match e {
            UserStoreError::UserAlreadyExists => AuthError::EmailInUse,
            other => AuthError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(e: PasswordHashError) -> Self {
        AuthError::SigningError(e.to_string())
    }
}
