use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::app_state::AppState;
use crate::domain::AuthenticatedUser;
use crate::errors::ApiError;
use crate::utils::bearer_token;

/// Extractor for protected handlers. Rejects the request unless it carries a verified,
/// non-revoked access token.
pub struct Authenticated(pub AuthenticatedUser);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(ApiError::MissingToken)?;
        let user = state.token_service().verify(token).await?;
        Ok(Self(user))
    }
}
