use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::models::Principal;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn delete_user(&self, id: UserId, requester: &Principal) -> Result<(), UserError> {
        let user = self.get_user(id).await?;

        if user.email.as_str() != requester.username() {
            tracing::warn!(
                user_id = %id,
                requester = %requester.username(),
                "Refusing to delete another member's account"
            );
            return Err(UserError::NotOwner {
                user: id.to_string(),
                requester: requester.username().to_string(),
            });
        }

        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
