use thiserror::Error;

use crate::user::errors::IdError;

#[derive(Debug, Clone, Error)]
pub enum TeacherError {
    #[error("Invalid teacher ID: {0}")]
    InvalidTeacherId(#[from] IdError),

    #[error("Teacher not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
