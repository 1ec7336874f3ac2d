use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::session::errors::SessionError;
use crate::session::errors::SessionFieldError;
use crate::teacher::models::TeacherId;
use crate::user::models::parse_id;
use crate::user::models::UserId;

/// A scheduled yoga class and the members who signed up for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionId,
    pub name: SessionName,
    pub date: DateTime<Utc>,
    pub description: SessionDescription,
    /// None once the teacher row has been removed.
    pub teacher_id: Option<TeacherId>,
    pub users: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn has_participant(&self, user_id: UserId) -> bool {
        self.users.contains(&user_id)
    }

    /// Overwrite the editable fields, keeping id, participants and creation time.
    pub fn apply(&mut self, command: SessionCommand, now: DateTime<Utc>) {
        self.name = command.name;
        self.date = command.date;
        self.description = command.description;
        self.teacher_id = Some(command.teacher_id);
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub i64);

impl SessionId {
    pub fn from_string(s: &str) -> Result<Self, SessionError> {
        Ok(SessionId(parse_id(s)?))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), SessionFieldError> {
    if value.trim().is_empty() {
        return Err(SessionFieldError::Blank { field });
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(SessionFieldError::TooLong { field, max, actual });
    }
    Ok(())
}

/// Session title, non-blank and at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionName(String);

impl SessionName {
    const MAX_LENGTH: usize = 50;

    pub fn new(name: String) -> Result<Self, SessionFieldError> {
        check_text("name", &name, Self::MAX_LENGTH)?;
        Ok(Self(name))
    }

    pub(crate) fn from_trusted(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-text description, non-blank and at most 2500 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDescription(String);

impl SessionDescription {
    const MAX_LENGTH: usize = 2500;

    pub fn new(description: String) -> Result<Self, SessionFieldError> {
        check_text("description", &description, Self::MAX_LENGTH)?;
        Ok(Self(description))
    }

    pub(crate) fn from_trusted(description: String) -> Self {
        Self(description)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated input for creating or editing a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCommand {
    pub name: SessionName,
    pub date: DateTime<Utc>,
    pub description: SessionDescription,
    pub teacher_id: TeacherId,
}
