use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{RefreshTokenRequest, RefreshedToken};
use crate::errors::{ApiError, AuthError};

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> Result<Json<RefreshedToken>, ApiError> {
    let token = request.refresh_token.trim();
    if token.is_empty() {
        return Err(AuthError::InvalidRefreshToken.into());
    }
    let refreshed = state.token_service().refresh(token).await?;
    Ok(Json(refreshed))
}
