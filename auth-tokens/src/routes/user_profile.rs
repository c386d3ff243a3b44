use axum::extract::State;
use axum::Json;

use super::Authenticated;
use crate::app_state::AppState;
use crate::domain::UserProfile;
use crate::errors::ApiError;

pub async fn user_profile(
    State(state): State<AppState>,
    Authenticated(user): Authenticated,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state.auth_service.user_profile(user.user_id).await?;
    Ok(Json(profile))
}
