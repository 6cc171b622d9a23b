//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// Session cookie and token lifetime configuration.
///
/// `ttl_minutes` is the single lifetime used both for the token `exp`
/// claim and for the cookie `Max-Age`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Token and cookie lifetime in minutes.
    #[serde(default = "default_ttl")]
    pub ttl_minutes: u64,
    /// Whether the cookie carries the `Secure` attribute.
    #[serde(default)]
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// The configured lifetime as a `chrono::Duration`.
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.ttl_minutes as i64)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_minutes: default_ttl(),
            cookie_secure: false,
        }
    }
}

fn default_cookie_name() -> String {
    "job-auth-token".to_string()
}

fn default_ttl() -> u64 {
    24 * 60
}
