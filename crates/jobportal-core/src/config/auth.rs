//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    ///
    /// There is no default: an unset secret makes token issuance fail.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Clock-skew leeway in seconds applied when checking `exp`.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Minimum password length for signup and employee creation.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            leeway_seconds: 0,
            password_min_length: default_password_min(),
        }
    }
}

fn default_password_min() -> usize {
    6
}
