//! Token verification failures.

use thiserror::Error;

use jobportal_core::error::AppError;

/// Why a token could not be issued or verified.
///
/// Callers outside the codec treat every variant except `MissingSecret`
/// as "unauthenticated"; the distinction is kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signature does not match the payload under our key.
    #[error("invalid token signature")]
    InvalidSignature,
    /// `exp` is in the past.
    #[error("token has expired")]
    Expired,
    /// The token is structurally invalid or carries an unusable payload.
    #[error("malformed token: {0}")]
    Malformed(String),
    /// No signing secret is configured.
    #[error("no token signing secret is configured")]
    MissingSecret,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingSecret => {
                AppError::configuration("Token signing secret is not configured")
            }
            _ => AppError::unauthorized("Authentication required"),
        }
    }
}
