//! # jobportal-entity
//!
//! Domain document models for JobPortal. Every struct in this crate that
//! implements [`Document`] is persisted as one JSON document in a named
//! collection. Records carrying a creator or assignee reference also
//! implement [`Owned`], which the policy engine uses for ownership checks.

pub mod application;
pub mod document;
pub mod interview;
pub mod job;
pub mod kanban;
pub mod mail;
pub mod sheet;
pub mod user;

pub use document::{Document, Owned};
