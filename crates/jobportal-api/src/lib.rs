//! # jobportal-api
//!
//! HTTP API layer for JobPortal built on Axum.
//!
//! Provides the REST endpoints under `/api`, the edge guard that runs
//! ahead of every route, request logging, extractors, DTOs, and the
//! mapping from [`AppError`](jobportal_core::AppError) to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use router::{build_router, build_router_with_pages};
pub use state::AppState;
