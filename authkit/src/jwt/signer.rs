use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Both keys are derived once from the
/// process-wide secret; verification depends only on the token content,
/// the key, and the clock.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenSigner {
    /// Create a new token signer with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `subject`, expiring [`TOKEN_TTL_SECS`] from now.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    ///
    /// [`TOKEN_TTL_SECS`]: super::claims::TOKEN_TTL_SECS
    pub fn issue(&self, subject: i64) -> Result<String, TokenError> {
        self.sign(&Claims::new(subject))
    }

    /// Sign an explicit claims payload.
    ///
    /// # Errors
    /// * `Signing` - Token encoding failed
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key).map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return the claims it carries.
    ///
    /// Expiry is checked with zero leeway, so there is no grace window past
    /// the `exp` timestamp.
    ///
    /// # Errors
    /// * `Expired` - Token expiration time has passed
    /// * `InvalidSignature` - Token was not signed with this signer's secret
    /// * `Malformed` - Token structure or payload cannot be decoded
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}
