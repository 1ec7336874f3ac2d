use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::SessionData;
use super::SessionRequestBody;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::session::models::SessionId;
use crate::session::ports::SessionServicePort;

pub async fn update_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Result<Json<SessionRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    let session_id = SessionId::from_string(&session_id)?;
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    state
        .session_service
        .update(session_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::OK, session.into()))
}
