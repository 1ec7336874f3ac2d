use std::sync::Arc;

use async_trait::async_trait;

use super::errors::AuthError;
use super::models::Principal;
use super::ports::IdentityLoader;
use crate::user::ports::UserRepository;

/// Loads principals straight from the user store.
///
/// Every call is one lookup; authenticated requests re-hit the store each time.
pub struct UserIdentityLoader<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserIdentityLoader<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> IdentityLoader for UserIdentityLoader<UR>
where
    UR: UserRepository,
{
    async fn load_by_username(&self, username: &str) -> Result<Principal, AuthError> {
        self.repository
            .find_by_email(username)
            .await?
            .map(|ref user| Principal::from(user))
            .ok_or_else(|| AuthError::IdentityNotFound(username.to_string()))
    }
}
