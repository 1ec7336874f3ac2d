use async_trait::async_trait;

use super::errors::AuthError;
use super::models::LoginCommand;
use super::models::LoginOutcome;
use super::models::Principal;
use super::models::RegisterCommand;

/// Resolves a username to the principal it names.
#[async_trait]
pub trait IdentityLoader: Send + Sync + 'static {
    /// Exactly one store lookup per call; no caching.
    ///
    /// # Errors
    /// * `IdentityNotFound` - No user with that username
    /// * `Store` - Lookup failed
    async fn load_by_username(&self, username: &str) -> Result<Principal, AuthError>;
}

/// Checks submitted credentials; callers never touch hashing themselves.
#[async_trait]
pub trait AuthenticationManager: Send + Sync + 'static {
    /// # Errors
    /// * `AuthenticationFailed` - Unknown username or wrong password
    /// * `Password` / `Store` - Infrastructure failure
    async fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError>;
}

/// Login and registration, as exposed to the HTTP layer.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token bound to the principal's username.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Bad credentials
    /// * `Token` - Token could not be issued
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AuthError>;

    /// Create a non-admin account with a hashed password.
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Email already registered
    /// * `Password` / `Store` - Infrastructure failure
    async fn register(&self, command: RegisterCommand) -> Result<(), AuthError>;
}
