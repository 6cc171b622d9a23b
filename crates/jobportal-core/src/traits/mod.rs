//! Core traits defined in `jobportal-core` and implemented by other crates.

pub mod store;

pub use store::DocumentStore;
