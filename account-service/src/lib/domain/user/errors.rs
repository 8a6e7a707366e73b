use authkit::PasswordError;
use authkit::TokenError;
use thiserror::Error;

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email or phone already registered: {0}")]
    Conflict(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Credential errors (automatically converted via #[from])
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    Store(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
