//! Request middleware: CORS, the edge guard and request logging.

pub mod cors;
pub mod guard;
pub mod logging;

pub use cors::{build_cors_layer, preflight_no_content};
pub use guard::{EdgeGuard, GuardDecision, edge_guard};
pub use logging::request_logging;
