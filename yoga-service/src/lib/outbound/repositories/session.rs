use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::session::errors::SessionError;
use crate::session::models::Session;
use crate::session::models::SessionCommand;
use crate::session::models::SessionDescription;
use crate::session::models::SessionId;
use crate::session::models::SessionName;
use crate::session::ports::SessionRepository;
use crate::teacher::models::TeacherId;
use crate::user::models::UserId;

const SELECT_SESSIONS: &str = r#"
    SELECT s.id, s.name, s.description, s.date, s.teacher_id, s.created_at, s.updated_at,
           COALESCE(
               array_agg(p.user_id ORDER BY p.user_id) FILTER (WHERE p.user_id IS NOT NULL),
               '{}'::BIGINT[]
           ) AS users
    FROM sessions s
    LEFT JOIN participate p ON p.session_id = s.id
"#;

#[derive(FromRow)]
struct SessionRow {
    id: i64,
    name: String,
    description: String,
    date: DateTime<Utc>,
    teacher_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    users: Vec<i64>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            id: SessionId(row.id),
            name: SessionName::from_trusted(row.name),
            date: row.date,
            description: SessionDescription::from_trusted(row.description),
            teacher_id: row.teacher_id.map(TeacherId),
            users: row.users.into_iter().map(UserId).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Map a write failure, turning broken references into domain errors.
fn write_error(e: sqlx::Error, teacher_id: Option<TeacherId>) -> SessionError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            match db_err.constraint() {
                Some("sessions_teacher_id_fkey") => {
                    let teacher = teacher_id.map(|id| id.to_string()).unwrap_or_default();
                    return SessionError::TeacherNotFound(teacher);
                }
                Some("participate_user_id_fkey") => {
                    return SessionError::UserNotFound(db_err.message().to_string());
                }
                _ => {}
            }
        }
    }
    SessionError::DatabaseError(e.to_string())
}

pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn find_all(&self) -> Result<Vec<Session>, SessionError> {
        let query = format!("{} GROUP BY s.id ORDER BY s.id", SELECT_SESSIONS);
        let rows = sqlx::query_as::<_, SessionRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Session::from).collect())
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, SessionError> {
        let query = format!("{} WHERE s.id = $1 GROUP BY s.id", SELECT_SESSIONS);
        let row = sqlx::query_as::<_, SessionRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(row.map(Session::from))
    }

    async fn create(&self, command: SessionCommand) -> Result<Session, SessionError> {
        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO sessions (name, description, date, teacher_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(command.name.as_str())
        .bind(command.description.as_str())
        .bind(command.date)
        .bind(command.teacher_id.0)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, Some(command.teacher_id)))?;

        Ok(Session {
            id: SessionId(id),
            name: command.name,
            date: command.date,
            description: command.description,
            teacher_id: Some(command.teacher_id),
            users: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn save(&self, session: Session) -> Result<Session, SessionError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET name = $2, description = $3, date = $4, teacher_id = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(session.id.0)
        .bind(session.name.as_str())
        .bind(session.description.as_str())
        .bind(session.date)
        .bind(session.teacher_id.map(|id| id.0))
        .bind(session.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error(e, session.teacher_id))?;

        if result.rows_affected() == 0 {
            return Err(SessionError::NotFound(session.id.to_string()));
        }

        sqlx::query("DELETE FROM participate WHERE session_id = $1")
            .bind(session.id.0)
            .execute(&mut *tx)
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        let user_ids: Vec<i64> = session.users.iter().map(|id| id.0).collect();
        sqlx::query(
            r#"
            INSERT INTO participate (session_id, user_id)
            SELECT $1, user_id FROM UNNEST($2::BIGINT[]) AS user_id
            "#,
        )
        .bind(session.id.0)
        .bind(user_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error(e, session.teacher_id))?;

        tx.commit()
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(session)
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SessionError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
