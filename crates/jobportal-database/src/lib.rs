//! # jobportal-database
//!
//! Document store backends (in-memory and PostgreSQL), the lazily
//! initialized [`DatabaseHandle`], and typed repositories over the
//! [`DocumentStore`](jobportal_core::traits::DocumentStore) trait.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::{DatabaseHandle, DatabasePool};
pub use repositories::{Repository, UserRepository};
