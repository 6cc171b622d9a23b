//! Session token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::Identity;

use super::error::TokenError;

/// Payload of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// User email at issuance.
    pub email: String,
    /// Role name at issuance. Parsed strictly on decode.
    pub role: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Build claims for `identity`, issued at `now` and valid for `ttl`.
    pub fn for_identity(identity: &Identity, ttl: chrono::Duration, now: DateTime<Utc>) -> Self {
        Self {
            sub: identity.subject_id,
            email: identity.email.clone(),
            role: identity.role.as_str().to_string(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Convert verified claims back into an identity.
    ///
    /// A role outside the closed set makes the whole token malformed.
    pub fn into_identity(self) -> Result<Identity, TokenError> {
        let role = self
            .role
            .parse()
            .map_err(|_| TokenError::Malformed(format!("unknown role '{}'", self.role)))?;
        Ok(Identity {
            subject_id: self.sub,
            email: self.email,
            role,
            name: self.name,
        })
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
