//! Session cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use jobportal_core::config::SessionConfig;

/// Cookie carrying a freshly issued session token.
///
/// `Max-Age` follows the same lifetime as the token's `exp` claim.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::minutes(config.ttl_minutes as i64))
        .build()
}

/// Empty cookie that makes the browser drop the session immediately.
pub fn expired_session_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), String::new()))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
