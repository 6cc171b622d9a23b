//! Table-driven authorization.
//!
//! Every service asks the [`PolicyEngine`] before touching data. The
//! engine looks up a [`Rule`] for `(role, resource kind, action)` in a
//! single [`PolicyTable`]; pairs missing from the table are denied.

pub mod engine;
pub mod rules;

pub use engine::{Denial, PolicyEngine, Scope};
pub use rules::{Action, PolicyTable, ResourceKind, Rule};
