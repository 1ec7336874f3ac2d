use axum::extract::Path;
use axum::extract::State;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiOk;
use crate::inbound::http::router::AppState;
use crate::session::models::SessionId;
use crate::session::ports::SessionServicePort;
use crate::user::models::UserId;

pub async fn participate(
    State(state): State<AppState>,
    Path((session_id, user_id)): Path<(String, String)>,
) -> Result<ApiOk, ApiError> {
    let session_id = SessionId::from_string(&session_id)?;
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.session_service.participate(session_id, user_id).await?;

    Ok(ApiOk)
}
