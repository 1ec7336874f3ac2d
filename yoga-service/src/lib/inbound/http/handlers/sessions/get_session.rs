use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::SessionData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::session::models::SessionId;
use crate::session::ports::SessionServicePort;

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    let session_id = SessionId::from_string(&session_id)?;

    state
        .session_service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}
