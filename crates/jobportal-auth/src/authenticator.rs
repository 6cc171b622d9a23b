//! Request authentication: session cookie value → optional identity.

use tracing::debug;

use crate::identity::Identity;
use crate::jwt::JwtDecoder;

/// Resolves the session cookie into an [`Identity`].
///
/// Never fails: a missing cookie and an invalid token both yield `None`.
#[derive(Debug, Clone)]
pub struct Authenticator {
    decoder: JwtDecoder,
    cookie_name: String,
}

impl Authenticator {
    /// Create an authenticator reading `cookie_name`.
    pub fn new(decoder: JwtDecoder, cookie_name: impl Into<String>) -> Self {
        Self {
            decoder,
            cookie_name: cookie_name.into(),
        }
    }

    /// Name of the cookie carrying the session token.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Identify the caller from the session cookie value, if any.
    pub fn identify(&self, cookie_value: Option<&str>) -> Option<Identity> {
        let token = cookie_value.filter(|v| !v.is_empty())?;
        match self.decoder.verify(token) {
            Ok(identity) => Some(identity),
            Err(e) => {
                debug!(reason = %e, "Ignoring unverifiable session token");
                None
            }
        }
    }
}
