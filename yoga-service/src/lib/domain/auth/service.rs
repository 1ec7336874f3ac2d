use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use super::errors::AuthError;
use super::models::LoginCommand;
use super::models::LoginOutcome;
use super::models::RegisterCommand;
use super::ports::AuthServicePort;
use super::ports::AuthenticationManager;
use crate::user::errors::UserError;
use crate::user::models::NewUser;
use crate::user::ports::UserRepository;

/// Login and registration orchestration.
pub struct AuthService<AM, UR>
where
    AM: AuthenticationManager,
    UR: UserRepository,
{
    authentication_manager: Arc<AM>,
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<AM, UR> AuthService<AM, UR>
where
    AM: AuthenticationManager,
    UR: UserRepository,
{
    /// # Arguments
    /// * `authentication_manager` - Credential check used at login
    /// * `repository` - User store receiving new registrations
    /// * `authenticator` - Token issuer and password hasher
    pub fn new(
        authentication_manager: Arc<AM>,
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            authentication_manager,
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<AM, UR> AuthServicePort for AuthService<AM, UR>
where
    AM: AuthenticationManager,
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AuthError> {
        let principal = match self
            .authentication_manager
            .authenticate(&command.username, &command.password)
            .await
        {
            Ok(principal) => principal,
            Err(e) => {
                tracing::info!(username = %command.username, error = %e, "Login rejected");
                return Err(e);
            }
        };

        let token = self.authenticator.issue_token(principal.username())?;
        tracing::info!(user_id = %principal.id(), "User logged in");

        Ok(LoginOutcome { token, principal })
    }

    async fn register(&self, command: RegisterCommand) -> Result<(), AuthError> {
        if self.repository.exists_by_email(&command.email).await? {
            return Err(AuthError::DuplicateIdentity(command.email.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())?;

        let now = Utc::now();
        let new_user = NewUser {
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            password_hash,
            admin: false,
            created_at: now,
            updated_at: now,
        };

        // A concurrent registration can still win the race on the unique index.
        let user = self.repository.create(new_user).await.map_err(|e| match e {
            UserError::EmailAlreadyExists(email) => AuthError::DuplicateIdentity(email),
            other => AuthError::Store(other),
        })?;
        tracing::info!(user_id = %user.id, "User registered");

        Ok(())
    }
}
