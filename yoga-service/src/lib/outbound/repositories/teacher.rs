use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::teacher::errors::TeacherError;
use crate::teacher::models::Teacher;
use crate::teacher::models::TeacherId;
use crate::teacher::ports::TeacherRepository;

#[derive(FromRow)]
struct TeacherRow {
    id: i64,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Teacher {
            id: TeacherId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PostgresTeacherRepository {
    pool: PgPool,
}

impl PostgresTeacherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for PostgresTeacherRepository {
    async fn find_all(&self) -> Result<Vec<Teacher>, TeacherError> {
        let rows = sqlx::query_as::<_, TeacherRow>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM teachers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TeacherError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, TeacherError> {
        let row = sqlx::query_as::<_, TeacherRow>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM teachers WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TeacherError::DatabaseError(e.to_string()))?;

        Ok(row.map(Teacher::from))
    }
}
