//! Store failures surface as a generic 500.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use helpers::TestApp;
use jobportal_core::error::AppError;
use jobportal_core::result::AppResult;
use jobportal_core::traits::DocumentStore;
use jobportal_core::types::filter::Filter;
use jobportal_database::store::MemoryStore;
use jobportal_entity::user::Role;

/// Memory store whose writes start failing once `broken` is set.
#[derive(Debug, Default)]
struct FlakyStore {
    inner: MemoryStore,
    broken: AtomicBool,
}

impl FlakyStore {
    fn check(&self) -> AppResult<()> {
        if self.broken.load(Ordering::SeqCst) {
            Err(AppError::database("connection reset by peer"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> AppResult<()> {
        self.check()?;
        self.inner.insert(collection, id, doc).await
    }

    async fn get(&self, collection: &str, id: Uuid) -> AppResult<Option<Value>> {
        self.inner.get(collection, id).await
    }

    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Value>> {
        self.inner.find(collection, filter).await
    }

    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> AppResult<bool> {
        self.check()?;
        self.inner.replace(collection, id, doc).await
    }

    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool> {
        self.check()?;
        self.inner.delete(collection, id).await
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        self.check()?;
        self.inner.delete_many(collection, filter).await
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        self.inner.count(collection, filter).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

fn job_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Write Rust",
        "location": "Remote",
        "job_type": "full-time",
        "openings": 2,
    })
}

#[tokio::test]
async fn test_failed_write_is_a_generic_internal_error() {
    let store = Arc::new(FlakyStore::default());
    let app = TestApp::with_store(store.clone());
    let (_, token) = app.login_as(Role::Admin, "a@example.com").await;

    let created = app.post("/api/jobs", job_body("Backend"), Some(&token)).await;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);
    let path = format!("/api/jobs/{}", created.data()["id"].as_str().unwrap());

    store.broken.store(true, Ordering::SeqCst);

    let response = app.post("/api/jobs", job_body("Frontend"), Some(&token)).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "An internal error occurred");
    assert!(!response.body.to_string().contains("connection reset"));

    let response = app.put(&path, json!({ "title": "Renamed" }), Some(&token)).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");

    // Nothing was persisted by the failed update.
    store.broken.store(false, Ordering::SeqCst);
    let job = app.get(&path, None).await;
    assert_eq!(job.data()["title"], "Backend");
}
