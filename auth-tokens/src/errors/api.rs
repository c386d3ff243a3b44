use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AuthError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("first name and last name are required")]
    MissingName,

    #[error("Your request is not authorized")]
    MissingToken,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidEmail | ApiError::InvalidPassword(_) | ApiError::MissingName => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::Auth(e) => match e {
                AuthError::EmailInUse => StatusCode::CONFLICT,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::StoreUnavailable(_) | AuthError::SigningError(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                AuthError::OperationCancelled => StatusCode::SERVICE_UNAVAILABLE,
                AuthError::InvalidCredentials
                | AuthError::MalformedToken
                | AuthError::BadSignature
                | AuthError::ExpiredToken
                | AuthError::InvalidRefreshToken
                | AuthError::RefreshTokenExpired
                | AuthError::Revoked => StatusCode::UNAUTHORIZED,
            },
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Auth(e) => e.code(),
            ApiError::InvalidEmail => "invalid_email",
            ApiError::InvalidPassword(_) => "invalid_password",
            ApiError::MissingName => "missing_name",
            ApiError::MissingToken => "missing_token",
        }
    }

    fn message(&self) -> String {
        match self {
            // Internal details stay in the logs.
            ApiError::Auth(e) if e.is_internal() => "internal server error".to_owned(),
            ApiError::Auth(AuthError::ExpiredToken) => {
                "The authorization token is expired".to_owned()
            }
            ApiError::Auth(
                AuthError::MalformedToken | AuthError::BadSignature | AuthError::Revoked,
            ) => "invalid authorization token".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.code().to_owned(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
