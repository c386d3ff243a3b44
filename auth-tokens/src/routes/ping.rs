use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::MessageResponse;

pub async fn ping(State(state): State<AppState>) -> Json<MessageResponse> {
    let message = if state.config.is_production() {
        format!(
            "Pong! I am {}. Version is {}.",
            state.config.app_region(),
            state.config.app_version()
        )
    } else {
        "pong".to_owned()
    };
    Json(MessageResponse { message })
}
