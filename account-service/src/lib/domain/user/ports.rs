use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Arguments
    /// * `user` - User row to create, password already hashed
    ///
    /// # Returns
    /// Store-assigned id of the created user
    ///
    /// # Errors
    /// * `Conflict` - Email or phone is already registered
    /// * `Store` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<UserId, UserError>;

    /// Retrieve user by login identifier.
    ///
    /// # Arguments
    /// * `identifier` - Email address or phone number, compared verbatim
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Store` - Database operation failed
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Store` - Database operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve all users, in insertion order.
    ///
    /// # Returns
    /// Vector of password-free user profiles
    ///
    /// # Errors
    /// * `Store` - Database operation failed
    async fn list_all(&self) -> Result<Vec<UserProfile>, UserError>;
}
