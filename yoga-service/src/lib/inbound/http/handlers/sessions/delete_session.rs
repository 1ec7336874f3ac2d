use axum::extract::Path;
use axum::extract::State;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiOk;
use crate::inbound::http::router::AppState;
use crate::session::models::SessionId;
use crate::session::ports::SessionServicePort;

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiOk, ApiError> {
    let session_id = SessionId::from_string(&session_id)?;

    state.session_service.delete(session_id).await?;

    Ok(ApiOk)
}
