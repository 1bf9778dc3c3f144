//! # Session Timer API
//!
//! HTTP handlers, response envelopes, and the router for the extend and
//! validate endpoints.

pub mod handlers;
pub mod error;
pub mod response;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;

#[cfg(test)]
pub(crate) mod test_support;
