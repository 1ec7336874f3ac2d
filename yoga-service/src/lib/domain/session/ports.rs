use async_trait::async_trait;

use crate::session::errors::SessionError;
use crate::session::models::Session;
use crate::session::models::SessionCommand;
use crate::session::models::SessionId;
use crate::user::models::UserId;

/// Domain service operations for sessions and participation.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<Session>, SessionError>;

    /// # Errors
    /// * `NotFound` - Session does not exist
    async fn get_session(&self, id: SessionId) -> Result<Session, SessionError>;

    /// # Errors
    /// * `TeacherNotFound` - Referenced teacher does not exist
    async fn create(&self, command: SessionCommand) -> Result<Session, SessionError>;

    /// Replace the editable fields; participants are kept.
    ///
    /// # Errors
    /// * `NotFound` - Session does not exist
    /// * `TeacherNotFound` - Referenced teacher does not exist
    async fn update(&self, id: SessionId, command: SessionCommand)
        -> Result<Session, SessionError>;

    /// # Errors
    /// * `NotFound` - Session does not exist
    async fn delete(&self, id: SessionId) -> Result<(), SessionError>;

    /// Sign a member up for a session.
    ///
    /// # Errors
    /// * `NotFound` - Session does not exist
    /// * `UserNotFound` - User does not exist
    /// * `AlreadyParticipating` - User is already signed up
    async fn participate(&self, id: SessionId, user_id: UserId) -> Result<(), SessionError>;

    /// Withdraw a member from a session.
    ///
    /// # Errors
    /// * `NotFound` - Session does not exist
    /// * `NotParticipating` - User is not signed up
    async fn no_longer_participate(
        &self,
        id: SessionId,
        user_id: UserId,
    ) -> Result<(), SessionError>;
}

/// Persistence operations for sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<Session>, SessionError>;

    /// Retrieve a session with its participants (None if not found).
    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, SessionError>;

    /// Persist a new session without participants.
    ///
    /// # Errors
    /// * `TeacherNotFound` - Referenced teacher does not exist
    async fn create(&self, command: SessionCommand) -> Result<Session, SessionError>;

    /// Write every field of an existing session, participant list included.
    ///
    /// # Errors
    /// * `NotFound` - Session does not exist
    /// * `TeacherNotFound` - Referenced teacher does not exist
    async fn save(&self, session: Session) -> Result<Session, SessionError>;

    /// # Errors
    /// * `NotFound` - Session does not exist
    async fn delete(&self, id: SessionId) -> Result<(), SessionError>;
}
