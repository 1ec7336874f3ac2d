use thiserror::Error;

use crate::user::errors::UserError;

/// Outcomes of identity resolution, login and registration.
///
/// Unknown users and bad passwords are ordinary results here, not panics.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("User not found with username: {0}")]
    IdentityNotFound(String),

    #[error("Bad credentials")]
    AuthenticationFailed,

    #[error("Email is already taken: {0}")]
    DuplicateIdentity(String),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("User store error: {0}")]
    Store(#[from] UserError),
}
