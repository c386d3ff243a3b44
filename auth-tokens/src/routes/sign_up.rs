use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{Email, Password, SignUpRequest, UserProfile};
use crate::errors::ApiError;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let first_name = request.first_name.trim().to_owned();
    let last_name = request.last_name.trim().to_owned();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(ApiError::MissingName);
    }
    let email = Email::parse(&request.email).or(Err(ApiError::InvalidEmail))?;
    let password = Password::parse_new(request.password).map_err(ApiError::InvalidPassword)?;

    let user = state
        .auth_service
        .sign_up(first_name, last_name, email, password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserProfile::from(user))))
}
