use std::sync::Arc;

use authkit::PasswordHasher;
use authkit::TokenSigner;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;
use crate::user::ports::UserStore;

/// Domain service for account operations.
///
/// Owns the register and login flows with dependency injection. Password
/// hashing and verification run on the blocking thread pool so the CPU-bound
/// bcrypt work never stalls the async workers.
pub struct UserService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_signer: Arc<TokenSigner>,
}

impl<S> UserService<S>
where
    S: UserStore,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `password_hasher` - Credential hashing implementation
    /// * `token_signer` - Access token signing implementation
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(
        store: Arc<S>,
        password_hasher: PasswordHasher,
        token_signer: Arc<TokenSigner>,
    ) -> Self {
        Self {
            store,
            password_hasher,
            token_signer,
        }
    }

    /// Register a new user.
    ///
    /// Hashes the password, then persists the user.
    ///
    /// # Arguments
    /// * `command` - Registration data with the plain text password
    ///
    /// # Returns
    /// Store-assigned id of the new user
    ///
    /// # Errors
    /// * `Conflict` - Email or phone is already registered
    /// * `Password` - Password hashing failed
    /// * `Store` - Database operation failed
    pub async fn register(&self, command: RegisterUserCommand) -> Result<UserId, UserError> {
        let hasher = self.password_hasher;
        let password = command.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))??;

        self.store
            .create(NewUser {
                name: command.name,
                email: command.email,
                phone: command.phone,
                password_hash,
            })
            .await
    }

    /// Authenticate a user and issue an access token.
    ///
    /// # Arguments
    /// * `identifier` - Email address or phone number of the account
    /// * `password` - Plain text password to verify
    ///
    /// # Returns
    /// Signed access token carrying the user's id as subject
    ///
    /// # Errors
    /// * `NotFound` - No account matches the identifier
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token signing failed
    /// * `Store` - Database operation failed
    pub async fn login(&self, identifier: &str, password: &str) -> Result<String, UserError> {
        let user = self
            .store
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| UserError::NotFound(identifier.to_string()))?;
        let User {
            id, password_hash, ..
        } = user;

        let hasher = self.password_hasher;
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))??;

        if !matches {
            return Err(UserError::InvalidCredentials);
        }

        Ok(self.token_signer.issue(id.into_inner())?)
    }

    /// Retrieve user by unique identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// User entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Store` - Database operation failed
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Retrieve all registered users as password-free profiles.
    ///
    /// # Errors
    /// * `Store` - Database operation failed
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, UserError> {
        self.store.list_all().await
    }
}
