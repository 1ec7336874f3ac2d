use thiserror::Error;

use crate::user::errors::IdError;

/// Error for session name/description validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionFieldError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Top-level error for session and participation operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid session: {0}")]
    InvalidField(#[from] SessionFieldError),

    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Teacher not found: {0}")]
    TeacherNotFound(String),

    #[error("User {user} already participates in session {session}")]
    AlreadyParticipating { session: String, user: String },

    #[error("User {user} does not participate in session {session}")]
    NotParticipating { session: String, user: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
