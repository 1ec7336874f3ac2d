use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

/// Message used when the triggering failure carried none.
pub const FALLBACK_MESSAGE: &str = "Unauthorized";

/// Message used when a protected route is reached without an authenticated principal.
pub const AUTHENTICATION_REQUIRED: &str = "Full authentication is required to access this resource";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnauthorizedBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl UnauthorizedBody {
    pub fn new(path: &str, message: Option<&str>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(FALLBACK_MESSAGE);

        Self {
            status: StatusCode::UNAUTHORIZED.as_u16(),
            error: "Unauthorized".to_string(),
            message: message.to_string(),
            path: path.to_string(),
        }
    }
}

/// Single place that turns an authorization failure into a 401 JSON response.
pub fn respond(path: &str, message: Option<&str>) -> Response {
    let body = UnauthorizedBody::new(path, message);
    tracing::warn!(path = %body.path, message = %body.message, "Unauthorized access");

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
