use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use super::errors::AuthError;
use super::models::Principal;
use super::ports::AuthenticationManager;
use super::ports::IdentityLoader;

/// Username/password verification against the stored hash.
///
/// Unknown usernames and wrong passwords are indistinguishable to the
/// caller, both in the error returned and in the hashing work performed.
pub struct CredentialVerifier<IL>
where
    IL: IdentityLoader,
{
    identity_loader: Arc<IL>,
    authenticator: Arc<Authenticator>,
}

impl<IL> CredentialVerifier<IL>
where
    IL: IdentityLoader,
{
    pub fn new(identity_loader: Arc<IL>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            identity_loader,
            authenticator,
        }
    }
}

#[async_trait]
impl<IL> AuthenticationManager for CredentialVerifier<IL>
where
    IL: IdentityLoader,
{
    async fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        let principal = match self.identity_loader.load_by_username(username).await {
            Ok(principal) => Some(principal),
            Err(AuthError::IdentityNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let stored_hash = principal.as_ref().map(Principal::password_hash);
        self.authenticator
            .verify_password(password, stored_hash)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::AuthenticationFailed,
                AuthenticationError::PasswordError(err) => AuthError::Password(err),
                AuthenticationError::JwtError(err) => AuthError::Token(err),
            })?;

        principal.ok_or(AuthError::AuthenticationFailed)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::user::models::UserId;

    const SECRET: &[u8] = b"test-secret-key-for-token-signing-that-is-at-least-sixty-four-bytes";

    mock! {
        pub TestIdentityLoader {}

        #[async_trait]
        impl IdentityLoader for TestIdentityLoader {
            async fn load_by_username(&self, username: &str) -> Result<Principal, AuthError>;
        }
    }

    fn verifier_with(loader: MockTestIdentityLoader) -> CredentialVerifier<MockTestIdentityLoader> {
        let authenticator = Arc::new(Authenticator::new(SECRET, 3_600_000).unwrap());
        CredentialVerifier::new(Arc::new(loader), authenticator)
    }

    #[tokio::test]
    async fn test_valid_credentials() {
        let hash = Authenticator::new(SECRET, 3_600_000)
            .unwrap()
            .hash_password("password")
            .unwrap();

        let mut loader = MockTestIdentityLoader::new();
        loader
            .expect_load_by_username()
            .withf(|username| username == "test@example.com")
            .times(1)
            .returning(move |username| {
                Ok(Principal::new(UserId(1), username, "Test", "User", false, hash.clone()))
            });

        let verifier = verifier_with(loader);

        let principal = verifier
            .authenticate("test@example.com", "password")
            .await
            .unwrap();
        assert_eq!(principal.id(), UserId(1));
        assert_eq!(principal.username(), "test@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let hash = Authenticator::new(SECRET, 3_600_000)
            .unwrap()
            .hash_password("password")
            .unwrap();

        let mut loader = MockTestIdentityLoader::new();
        loader
            .expect_load_by_username()
            .times(1)
            .returning(move |username| {
                Ok(Principal::new(UserId(1), username, "Test", "User", false, hash.clone()))
            });

        let verifier = verifier_with(loader);

        let result = verifier.authenticate("test@example.com", "wrong").await;
        assert!(matches!(result, Err(AuthError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn test_unknown_user_is_reported_as_bad_credentials() {
        let mut loader = MockTestIdentityLoader::new();
        loader
            .expect_load_by_username()
            .times(1)
            .returning(|username| Err(AuthError::IdentityNotFound(username.to_string())));

        let verifier = verifier_with(loader);

        let result = verifier.authenticate("ghost@example.com", "password").await;
        assert!(matches!(result, Err(AuthError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn test_corrupt_stored_hash() {
        let mut loader = MockTestIdentityLoader::new();
        loader
            .expect_load_by_username()
            .times(1)
            .returning(|username| {
                Ok(Principal::new(UserId(1), username, "Test", "User", false, "not-a-phc-string"))
            });

        let verifier = verifier_with(loader);

        let result = verifier.authenticate("test@example.com", "password").await;
        assert!(matches!(result, Err(AuthError::Password(_))));
    }
}
