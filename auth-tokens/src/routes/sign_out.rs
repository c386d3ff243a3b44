use axum::extract::State;
use axum::http::StatusCode;

use super::Authenticated;
use crate::app_state::AppState;
use crate::errors::ApiError;

pub async fn sign_out(
    State(state): State<AppState>,
    Authenticated(user): Authenticated,
) -> Result<StatusCode, ApiError> {
    state
        .token_service()
        .sign_out(user.user_id, user.expires_at, &user.token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
