use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use super::unauthorized;
use crate::auth::errors::AuthError;
use crate::session::errors::SessionError;
use crate::teacher::errors::TeacherError;
use crate::user::errors::UserError;

pub mod auth;
pub mod sessions;
pub mod teachers;
pub mod users;

/// Successful response; the payload is serialized as the whole body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Empty 200 for commands that return nothing.
pub struct ApiOk;

impl IntoResponse for ApiOk {
    fn into_response(self) -> Response {
        StatusCode::OK.into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized {
        path: String,
        message: Option<String>,
    },
}

impl ApiError {
    pub fn unauthorized(path: &str, message: impl Into<Option<String>>) -> Self {
        ApiError::Unauthorized {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Attach the request path that 401 bodies report.
    pub fn at_path(self, path: &str) -> Self {
        match self {
            ApiError::Unauthorized { message, .. } => ApiError::unauthorized(path, message),
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody::new("Internal server error")),
                )
                    .into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageBody::new(msg))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageBody::new(msg))).into_response()
            }
            ApiError::Unauthorized { path, message } => {
                unauthorized::respond(&path, message.as_deref())
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::InvalidUserId(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::NotOwner { .. } => ApiError::unauthorized("", err.to_string()),
            UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TeacherError> for ApiError {
    fn from(err: TeacherError) -> Self {
        match err {
            TeacherError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TeacherError::InvalidTeacherId(_) => ApiError::BadRequest(err.to_string()),
            TeacherError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) | SessionError::UserNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            SessionError::InvalidId(_)
            | SessionError::InvalidField(_)
            | SessionError::TeacherNotFound(_)
            | SessionError::AlreadyParticipating { .. }
            | SessionError::NotParticipating { .. } => ApiError::BadRequest(err.to_string()),
            SessionError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::IdentityNotFound(_) | AuthError::AuthenticationFailed => {
                ApiError::unauthorized("", AuthError::AuthenticationFailed.to_string())
            }
            AuthError::DuplicateIdentity(_) => {
                ApiError::BadRequest("Error: Email is already taken!".to_string())
            }
            AuthError::Token(_) | AuthError::Password(_) | AuthError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}
