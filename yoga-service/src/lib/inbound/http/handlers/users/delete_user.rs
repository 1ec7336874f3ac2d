use axum::extract::Path;
use axum::extract::State;
use axum::http::Uri;

use crate::inbound::http::extractors::CurrentPrincipal;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiOk;
use crate::inbound::http::router::AppState;
use crate::user::models::UserId;
use crate::user::ports::UserServicePort;

/// Members may only delete their own account.
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    uri: Uri,
    Path(user_id): Path<String>,
) -> Result<ApiOk, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .user_service
        .delete_user(user_id, &principal)
        .await
        .map_err(|e| ApiError::from(e).at_path(uri.path()))?;

    Ok(ApiOk)
}
