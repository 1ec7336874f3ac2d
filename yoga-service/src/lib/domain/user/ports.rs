use async_trait::async_trait;

use crate::auth::models::Principal;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Domain service operations for user management.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// Delete a user account on behalf of `requester`.
    ///
    /// Members may only delete their own account.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `NotOwner` - Requester is someone else
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: UserId, requester: &Principal) -> Result<(), UserError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user and return it with its assigned id.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier (None if not found).
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address (None if not found).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Whether an account with this email exists.
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: UserId) -> Result<(), UserError>;
}
