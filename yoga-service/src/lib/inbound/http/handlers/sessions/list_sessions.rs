use axum::extract::State;
use axum::http::StatusCode;

use super::SessionData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;

pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SessionData>>, ApiError> {
    state
        .session_service
        .find_all()
        .await
        .map_err(ApiError::from)
        .map(|sessions| {
            ApiSuccess::new(
                StatusCode::OK,
                sessions.iter().map(SessionData::from).collect(),
            )
        })
}
