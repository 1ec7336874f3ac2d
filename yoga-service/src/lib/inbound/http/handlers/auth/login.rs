use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::auth::models::LoginCommand;
use crate::auth::models::LoginOutcome;
use crate::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    uri: Uri,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<JwtResponseData>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if body.email.trim().is_empty() || body.password.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "email and password must not be blank".to_string(),
        ));
    }

    state
        .auth_service
        .login(LoginCommand {
            username: body.email,
            password: body.password,
        })
        .await
        .map_err(|e| ApiError::from(e).at_path(uri.path()))
        .map(|ref outcome| ApiSuccess::new(StatusCode::OK, outcome.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

/// Token plus a summary of who it was issued to. The password hash never leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponseData {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl From<&LoginOutcome> for JwtResponseData {
    fn from(outcome: &LoginOutcome) -> Self {
        let principal = &outcome.principal;
        Self {
            token: outcome.token.clone(),
            token_type: "Bearer".to_string(),
            id: principal.id().0,
            username: principal.username().to_string(),
            first_name: principal.first_name().to_string(),
            last_name: principal.last_name().to_string(),
            admin: principal.is_admin(),
        }
    }
}
