use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::session::errors::SessionError;
use crate::session::errors::SessionFieldError;
use crate::session::models::Session;
use crate::session::models::SessionCommand;
use crate::session::models::SessionDescription;
use crate::session::models::SessionName;
use crate::teacher::models::TeacherId;

pub mod create_session;
pub mod delete_session;
pub mod get_session;
pub mod list_sessions;
pub mod no_longer_participate;
pub mod participate;
pub mod update_session;

/// Session as sent to clients; `teacher_id` keeps its snake_case wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionData {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub teacher_id: Option<i64>,
    pub description: String,
    pub users: Vec<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Session> for SessionData {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.0,
            name: session.name.as_str().to_string(),
            date: session.date,
            teacher_id: session.teacher_id.map(|id| id.0),
            description: session.description.as_str().to_string(),
            users: session.users.iter().map(|id| id.0).collect(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

/// Create/update payload. Missing fields are reported as validation errors
/// rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionRequestBody {
    name: Option<String>,
    date: Option<DateTime<Utc>>,
    teacher_id: Option<i64>,
    description: Option<String>,
}

impl SessionRequestBody {
    fn try_into_command(self) -> Result<SessionCommand, SessionError> {
        let name = SessionName::new(self.name.unwrap_or_default())?;
        let description = SessionDescription::new(self.description.unwrap_or_default())?;
        let date = self.date.ok_or(SessionFieldError::Missing { field: "date" })?;
        let teacher_id = self
            .teacher_id
            .ok_or(SessionFieldError::Missing { field: "teacher_id" })?;

        Ok(SessionCommand {
            name,
            date,
            description,
            teacher_id: TeacherId(teacher_id),
        })
    }
}
