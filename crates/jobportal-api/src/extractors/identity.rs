//! `CurrentIdentity` extractor: reads the session cookie and resolves it.
//!
//! A missing or untrusted cookie yields an anonymous request rather than a
//! rejection. Handlers decide whether anonymity is acceptable.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use jobportal_auth::{Action, Authenticator, Identity, PolicyEngine, ResourceKind};
use jobportal_core::error::AppError;
use jobportal_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller's identity, if the session cookie verified.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Option<Identity>);

impl CurrentIdentity {
    /// Build the service-layer request context.
    pub fn context(self) -> RequestContext {
        RequestContext::new(self.0)
    }

    /// Run the role gate for `action` on `kind`, then build the context.
    ///
    /// Handlers call this before parsing ids or bodies, so an anonymous
    /// caller sees `401` and a wrong role `403` whatever the payload.
    pub fn authorize(
        self,
        policy: &PolicyEngine,
        kind: ResourceKind,
        action: Action,
    ) -> Result<RequestContext, ApiError> {
        policy
            .check_role(self.0.as_ref(), kind, action)
            .map_err(AppError::from)?;
        Ok(self.context())
    }
}

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentIdentity(identify_headers(
            &state.authenticator,
            &parts.headers,
        )))
    }
}

/// Resolve the session cookie carried in `headers`.
pub fn identify_headers(authenticator: &Authenticator, headers: &HeaderMap) -> Option<Identity> {
    let jar = CookieJar::from_headers(headers);
    authenticator.identify(jar.get(authenticator.cookie_name()).map(|c| c.value()))
}
