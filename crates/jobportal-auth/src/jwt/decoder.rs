//! Session token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use jobportal_core::config::AuthConfig;

use super::claims::Claims;
use super::error::TokenError;
use crate::identity::Identity;

/// Validates session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC key; `None` when no secret is configured.
    decoding_key: Option<DecodingKey>,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("has_key", &self.decoding_key.is_some())
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_deref(), config.leeway_seconds)
    }

    /// Creates a decoder from a raw secret and clock-skew leeway.
    pub fn from_secret(secret: Option<&str>, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: secret
                .filter(|s| !s.is_empty())
                .map(|s| DecodingKey::from_secret(s.as_bytes())),
            validation,
        }
    }

    /// Verify `token` and return the identity it carries.
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        self.verify_claims(token)?.into_identity()
    }

    /// Verify `token` and return its raw claims.
    pub fn verify_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let key = self.decoding_key.as_ref().ok_or(TokenError::MissingSecret)?;
        let data = decode::<Claims>(token, key, &self.validation).map_err(|e| match e.kind() {
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed(e.to_string()),
        })?;
        Ok(data.claims)
    }
}
