//! Edge router guard configuration.

use serde::{Deserialize, Serialize};

/// A path prefix reserved for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleArea {
    /// Role name (`admin`, `employee`, `user`).
    pub role: String,
    /// Path prefix owned by the role, e.g. `/admin`.
    pub prefix: String,
    /// Landing page for the role after login.
    pub home: String,
}

/// Page-route policy applied before any handler runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Login page path.
    #[serde(default = "default_login")]
    pub login_path: String,
    /// Signup page path.
    #[serde(default = "default_signup")]
    pub signup_path: String,
    /// Prefix of API routes; these are never redirected.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Paths (and their sub-paths) reachable without a session.
    ///
    /// `/` matches only the root itself.
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
    /// Role-prefixed areas.
    #[serde(default = "default_areas")]
    pub areas: Vec<RoleArea>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: default_login(),
            signup_path: default_signup(),
            api_prefix: default_api_prefix(),
            public_paths: default_public_paths(),
            areas: default_areas(),
        }
    }
}

fn default_login() -> String {
    "/login".to_string()
}

fn default_signup() -> String {
    "/signup".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_public_paths() -> Vec<String> {
    ["/", "/jobs", "/blog", "/about", "/contact", "/static", "/favicon.ico"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_areas() -> Vec<RoleArea> {
    vec![
        RoleArea {
            role: "admin".to_string(),
            prefix: "/admin".to_string(),
            home: "/admin".to_string(),
        },
        RoleArea {
            role: "employee".to_string(),
            prefix: "/employee".to_string(),
            home: "/employee".to_string(),
        },
        RoleArea {
            role: "user".to_string(),
            prefix: "/user".to_string(),
            home: "/".to_string(),
        },
    ]
}
