use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::teacher::errors::TeacherError;
use crate::user::models::parse_id;

/// Instructor leading sessions. Read-only through the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeacherId(pub i64);

impl TeacherId {
    pub fn from_string(s: &str) -> Result<Self, TeacherError> {
        Ok(TeacherId(parse_id(s)?))
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
