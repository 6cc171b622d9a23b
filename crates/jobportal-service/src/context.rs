//! Request context carrying the caller's identity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use jobportal_auth::Identity;
use jobportal_core::error::AppError;

/// Context for the current request.
///
/// Built by the HTTP layer from the session cookie and passed into every
/// service method, so each operation knows who is acting. Anonymous
/// requests carry no identity.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The verified identity, if the request carried a valid session.
    pub identity: Option<Identity>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Context for a request with the given (optional) identity.
    pub fn new(identity: Option<Identity>) -> Self {
        Self {
            identity,
            request_time: Utc::now(),
        }
    }

    /// Context for an anonymous request.
    pub fn anonymous() -> Self {
        Self::new(None)
    }

    /// Context for an authenticated request.
    pub fn authenticated(identity: Identity) -> Self {
        Self::new(Some(identity))
    }

    /// The caller's identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The caller's identity, or a 401 error.
    pub fn require_identity(&self) -> Result<&Identity, AppError> {
        self.identity
            .as_ref()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }

    /// The caller's user ID, if authenticated.
    pub fn subject_id(&self) -> Option<Uuid> {
        self.identity.as_ref().map(|i| i.subject_id)
    }
}
