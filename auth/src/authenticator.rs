use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token handling.
///
/// Built once at startup from immutable configuration and shared read-only
/// across requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Bad credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Shared signing secret (at least 64 bytes)
    /// * `token_lifetime_ms` - Lifetime of issued tokens in milliseconds
    ///
    /// # Errors
    /// * `WeakSecret` / `InvalidLifetime` - Configuration rejected by the codec
    pub fn new(jwt_secret: &[u8], token_lifetime_ms: i64) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(jwt_secret, token_lifetime_ms)?,
        })
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against the stored hash of an account.
    ///
    /// `None` means no account was found; a decoy verification still runs
    /// and the result is `InvalidCredentials`, same as a wrong password.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account, or password does not match
    /// * `PasswordError` - Stored hash is unreadable
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: Option<&str>,
    ) -> Result<(), AuthenticationError> {
        let is_valid = match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash)?,
            None => self.password_hasher.verify_decoy(password),
        };

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(())
    }

    /// Issue a bearer token whose subject is `username`.
    pub fn issue_token(&self, username: &str) -> Result<String, JwtError> {
        self.token_codec.issue(username)
    }

    /// Total validity check, see [`TokenCodec::validate`].
    pub fn validate_token<'a>(&self, token: impl Into<Option<&'a str>>) -> bool {
        self.token_codec.validate(token)
    }

    /// Subject of an already validated token.
    pub fn subject_of(&self, token: &str) -> Result<String, JwtError> {
        self.token_codec.subject_of(token)
    }

    pub fn token_codec(&self) -> &TokenCodec {
        &self.token_codec
    }
}
