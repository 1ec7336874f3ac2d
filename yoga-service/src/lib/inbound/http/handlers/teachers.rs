use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::teacher::models::Teacher;

pub mod get_teacher;
pub mod list_teachers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherData {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Teacher> for TeacherData {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id.0,
            last_name: teacher.last_name.clone(),
            first_name: teacher.first_name.clone(),
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
        }
    }
}
