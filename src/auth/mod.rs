//! Mock authentication: pages, session extractor, in-memory registry.
//!
//! No real credential checking happens anywhere in here — any well-formed
//! login signs in after a simulated round trip. What is real is the session
//! plumbing: opaque cookie ids mapped to users with expiry.

pub mod handlers;
pub mod middleware;
pub mod store;

pub use middleware::{AuthContext, OptionalAuth, SESSION_COOKIE_NAME};
pub use store::{AuthStore, User};
