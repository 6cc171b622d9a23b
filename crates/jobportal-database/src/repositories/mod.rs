//! Typed repositories over the document store.

pub mod document;
pub mod user;

pub use document::Repository;
pub use user::UserRepository;
