//! Authentication primitives library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (bcrypt)
//! - Access token signing and verification (HMAC-SHA256 JWT)
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use authkit::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(4);
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use authkit::TokenSigner;
//!
//! let signer = TokenSigner::new(b"secret_key_at_least_32_bytes_long!");
//! let token = signer.issue(42).unwrap();
//! let claims = signer.verify(&token).unwrap();
//! assert_eq!(claims.sub, 42);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenSigner;
pub use jwt::TOKEN_TTL_SECS;
pub use password::PasswordError;
pub use password::PasswordHasher;
