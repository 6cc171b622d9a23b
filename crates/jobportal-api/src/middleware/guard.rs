//! Edge router guard.
//!
//! Runs ahead of every route, the fallback included, and redirects page
//! navigations that the caller's role may not see. API routes are never
//! redirected; their handlers answer with status codes instead.
//! Cross-origin headers come from the CORS layer wrapped around it.
//!
//! The guard resolves the role from the session cookie with its own
//! decoder and keeps no per-request state.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use jobportal_auth::JwtDecoder;
use jobportal_core::config::{AppConfig, GuardConfig};
use jobportal_entity::user::Role;

/// What the guard does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hand the request to the router.
    Pass,
    /// Send the browser elsewhere with `307`.
    Redirect(String),
}

/// Page-route policy together with the decoder it reads roles with.
#[derive(Debug, Clone)]
pub struct EdgeGuard {
    decoder: JwtDecoder,
    cookie_name: String,
    paths: GuardConfig,
}

impl EdgeGuard {
    /// Build the guard from application configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            decoder: JwtDecoder::new(&config.auth),
            cookie_name: config.session.cookie_name.clone(),
            paths: config.guard.clone(),
        }
    }

    /// Role carried by the session cookie. Any decode failure is anonymous.
    pub fn role_from_headers(&self, headers: &HeaderMap) -> Option<Role> {
        let jar = CookieJar::from_headers(headers);
        let token = jar.get(&self.cookie_name)?;
        match self.decoder.verify(token.value()) {
            Ok(identity) => Some(identity.role),
            Err(e) => {
                debug!(error = %e, "Guard ignoring session cookie");
                None
            }
        }
    }

    /// Decide the fate of a request to `path` made with `role`.
    pub fn decide(&self, path: &str, role: Option<Role>) -> GuardDecision {
        if under(path, &self.paths.api_prefix) {
            return GuardDecision::Pass;
        }

        if path == self.paths.login_path || path == self.paths.signup_path {
            return match role {
                Some(role) => GuardDecision::Redirect(self.home_for(role).to_string()),
                None => GuardDecision::Pass,
            };
        }

        if let Some(area) = self.paths.areas.iter().find(|a| under(path, &a.prefix)) {
            return if role.is_some_and(|r| r.as_str() == area.role) {
                GuardDecision::Pass
            } else {
                GuardDecision::Redirect(self.paths.login_path.clone())
            };
        }

        if self.is_public(path) || role.is_some() {
            GuardDecision::Pass
        } else {
            GuardDecision::Redirect(self.paths.login_path.clone())
        }
    }

    /// Landing page for `role`.
    pub fn home_for(&self, role: Role) -> &str {
        self.paths
            .areas
            .iter()
            .find(|a| a.role == role.as_str())
            .map(|a| a.home.as_str())
            .unwrap_or("/")
    }

    fn is_public(&self, path: &str) -> bool {
        self.paths.public_paths.iter().any(|p| {
            if p == "/" {
                path == "/"
            } else {
                under(path, p)
            }
        })
    }
}

/// Middleware entry point; see [`EdgeGuard::decide`].
pub async fn edge_guard(
    State(guard): State<Arc<EdgeGuard>>,
    request: Request,
    next: Next,
) -> Response {
    let role = guard.role_from_headers(request.headers());

    match guard.decide(request.uri().path(), role) {
        GuardDecision::Pass => next.run(request).await,
        GuardDecision::Redirect(to) => {
            debug!(
                path = %request.uri().path(),
                role = ?role,
                to = %to,
                "Guard redirect"
            );
            Redirect::temporary(&to).into_response()
        }
    }
}

/// Segment-aware prefix match: `/admin` covers `/admin` and `/admin/x`, not `/administrator`.
fn under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
