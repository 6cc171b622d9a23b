//! # jobportal-auth
//!
//! Authentication and authorization for JobPortal.
//!
//! ## Modules
//!
//! - `jwt`: session token issuance and verification (HS256)
//! - `password`: Argon2id password hashing and length policy
//! - `authenticator`: cookie value → optional [`Identity`]
//! - `policy`: the table-driven authorization engine

pub mod authenticator;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod policy;

pub use authenticator::Authenticator;
pub use identity::Identity;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::{Action, Denial, PolicyEngine, ResourceKind, Rule, Scope};
