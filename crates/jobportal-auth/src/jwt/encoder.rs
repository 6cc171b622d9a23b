//! Session token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use tracing::error;

use jobportal_core::config::AuthConfig;

use super::claims::Claims;
use super::error::TokenError;
use crate::identity::Identity;

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC key; `None` when no secret is configured.
    encoding_key: Option<EncodingKey>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("has_key", &self.encoding_key.is_some())
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_deref())
    }

    /// Creates an encoder from a raw secret. An empty secret counts as absent.
    pub fn from_secret(secret: Option<&str>) -> Self {
        Self {
            encoding_key: secret
                .filter(|s| !s.is_empty())
                .map(|s| EncodingKey::from_secret(s.as_bytes())),
        }
    }

    /// Issue a token for `identity` valid for `ttl` from now.
    pub fn issue(&self, identity: &Identity, ttl: chrono::Duration) -> Result<String, TokenError> {
        self.issue_at(identity, ttl, Utc::now())
    }

    /// Issue a token as if the clock read `now`.
    ///
    /// Deterministic: the same inputs always produce the same token.
    pub fn issue_at(
        &self,
        identity: &Identity,
        ttl: chrono::Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let Some(key) = &self.encoding_key else {
            error!("Refusing to issue session token: jwt_secret is not configured");
            return Err(TokenError::MissingSecret);
        };

        let claims = Claims::for_identity(identity, ttl, now);
        encode(&Header::new(Algorithm::HS256), &claims, key).map_err(|e| {
            error!(error = %e, "Failed to encode session token");
            TokenError::Malformed(e.to_string())
        })
    }
}
