//! Signup, login and session identity.

pub mod service;

pub use service::{AuthService, AuthSession, LoginInput, SignupInput};
