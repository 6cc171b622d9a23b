//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, HeaderName, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use jobportal_api::{AppState, build_router_with_pages, build_state};
use jobportal_auth::password::PasswordHasher;
use jobportal_core::config::AppConfig;
use jobportal_core::traits::DocumentStore;
use jobportal_database::store::memory::MemoryStore;
use jobportal_database::{DatabaseHandle, UserRepository};
use jobportal_entity::user::{CreateUser, Role, User};

pub const SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "correct-horse";
pub const COOKIE: &str = "job-auth-token";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for seeding records directly
    pub state: AppState,
}

/// A captured response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `Set-Cookie` header, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// Value of the session cookie set by this response.
    pub fn session_token(&self) -> Option<String> {
        let raw = self.set_cookie()?;
        let pair = raw.split(';').next()?;
        pair.strip_prefix(&format!("{COOKIE}="))
            .map(str::to_string)
    }

    /// The `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// The `data` member of the success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

/// Configuration used by every test app.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = Some(SECRET.to_string());
    config
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        Self::with_pages(Router::new())
    }

    /// Create a test application with extra page routes behind the guard
    pub fn with_pages(pages: Router<AppState>) -> Self {
        Self::build(Arc::new(MemoryStore::new()), pages)
    }

    /// Create a test application over the given store
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self::build(store, Router::new())
    }

    fn build(store: Arc<dyn DocumentStore>, pages: Router<AppState>) -> Self {
        let db = Arc::new(DatabaseHandle::from_store(store));
        let state = build_state(test_config(), db);
        let router = build_router_with_pages(state.clone(), pages);
        Self { router, state }
    }

    /// Send a request, optionally with a session token and a JSON body
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_with_headers(method, path, body, token, &[]).await
    }

    /// Like [`TestApp::request`], with extra request headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        extra: &[(HeaderName, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        for (name, value) in extra {
            builder = builder.header(name, *value);
        }
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("{COOKIE}={token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    /// Send a fully built request through the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request("GET", path, None, token).await
    }

    pub async fn post(&self, path: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request("POST", path, Some(body), token).await
    }

    pub async fn put(&self, path: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request("PUT", path, Some(body), token).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request("DELETE", path, None, token).await
    }

    /// Store a user with [`PASSWORD`] directly, bypassing the API
    pub async fn seed_user(&self, role: Role, email: &str) -> User {
        let user = User::new(CreateUser {
            name: email.split('@').next().unwrap_or(email).to_string(),
            email: email.to_string(),
            password_hash: PasswordHasher::new().hash_password(PASSWORD).unwrap(),
            role,
            phone: None,
            department: None,
            designation: None,
            created_by: None,
        });
        UserRepository::new(self.state.db.clone())
            .create(&user)
            .await
            .unwrap();
        user
    }

    /// Log in through the API and return the session token
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .post(
                "/api/auth/login",
                json!({ "email": email, "password": PASSWORD }),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.session_token().expect("login sets the session cookie")
    }

    /// Seed a user and log in as them
    pub async fn login_as(&self, role: Role, email: &str) -> (User, String) {
        let user = self.seed_user(role, email).await;
        let token = self.login(email).await;
        (user, token)
    }
}
