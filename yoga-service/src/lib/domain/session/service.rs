use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::session::errors::SessionError;
use crate::session::models::Session;
use crate::session::models::SessionCommand;
use crate::session::models::SessionId;
use crate::session::ports::SessionRepository;
use crate::session::ports::SessionServicePort;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

/// Domain service implementation for sessions and participation.
pub struct SessionService<SR, UR>
where
    SR: SessionRepository,
    UR: UserRepository,
{
    sessions: Arc<SR>,
    users: Arc<UR>,
}

impl<SR, UR> SessionService<SR, UR>
where
    SR: SessionRepository,
    UR: UserRepository,
{
    pub fn new(sessions: Arc<SR>, users: Arc<UR>) -> Self {
        Self { sessions, users }
    }
}

#[async_trait]
impl<SR, UR> SessionServicePort for SessionService<SR, UR>
where
    SR: SessionRepository,
    UR: UserRepository,
{
    async fn find_all(&self) -> Result<Vec<Session>, SessionError> {
        self.sessions.find_all().await
    }

    async fn get_session(&self, id: SessionId) -> Result<Session, SessionError> {
        self.sessions
            .find_by_id(id)
            .await?
            .ok_or(SessionError::NotFound(id.to_string()))
    }

    async fn create(&self, command: SessionCommand) -> Result<Session, SessionError> {
        let session = self.sessions.create(command).await?;
        tracing::info!(session_id = %session.id, "Session created");
        Ok(session)
    }

    async fn update(
        &self,
        id: SessionId,
        command: SessionCommand,
    ) -> Result<Session, SessionError> {
        let mut session = self.get_session(id).await?;
        session.apply(command, Utc::now());

        let session = self.sessions.save(session).await?;
        tracing::info!(session_id = %id, "Session updated");
        Ok(session)
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionError> {
        self.get_session(id).await?;
        self.sessions.delete(id).await?;
        tracing::info!(session_id = %id, "Session deleted");
        Ok(())
    }

    async fn participate(&self, id: SessionId, user_id: UserId) -> Result<(), SessionError> {
        let session = self.sessions.find_by_id(id).await?;
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        let mut session = session.ok_or(SessionError::NotFound(id.to_string()))?;
        if user.is_none() {
            return Err(SessionError::UserNotFound(user_id.to_string()));
        }

        if session.has_participant(user_id) {
            return Err(SessionError::AlreadyParticipating {
                session: id.to_string(),
                user: user_id.to_string(),
            });
        }

        session.users.push(user_id);
        self.sessions.save(session).await?;
        tracing::info!(session_id = %id, user_id = %user_id, "User joined session");

        Ok(())
    }

    async fn no_longer_participate(
        &self,
        id: SessionId,
        user_id: UserId,
    ) -> Result<(), SessionError> {
        let mut session = self.get_session(id).await?;

        if !session.has_participant(user_id) {
            return Err(SessionError::NotParticipating {
                session: id.to_string(),
                user: user_id.to_string(),
            });
        }

        session.users.retain(|participant| *participant != user_id);
        self.sessions.save(session).await?;
        tracing::info!(session_id = %id, user_id = %user_id, "User left session");

        Ok(())
    }
}
