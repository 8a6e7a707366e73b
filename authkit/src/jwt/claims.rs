use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of an issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Claims carried by every access token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: id of the authenticated user.
    pub sub: i64,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, expiring [`TOKEN_TTL_SECS`] from now.
    pub fn new(subject: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: subject,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let before = Utc::now().timestamp();
        let claims = Claims::new(42);
        let after = Utc::now().timestamp();

        assert_eq!(claims.sub, 42);
        assert!(claims.iat >= before && claims.iat <= after);
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }
}
