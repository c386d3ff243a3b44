use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{Email, IssuedTokens, Password, SignInRequest};
use crate::errors::ApiError;

pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<IssuedTokens>, ApiError> {
    let email = Email::parse(&request.email).or(Err(ApiError::InvalidEmail))?;
    let password = Password::parse(request.password).map_err(ApiError::InvalidPassword)?;

    let issued = state.auth_service.sign_in(&email, &password).await?;
    Ok(Json(issued))
}
