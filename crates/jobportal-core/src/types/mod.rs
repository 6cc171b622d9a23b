//! Core type definitions used across the JobPortal workspace.

pub mod filter;

pub use filter::Filter;
