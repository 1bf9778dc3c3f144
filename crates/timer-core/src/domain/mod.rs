//! # Session Timer Core - Domain Module
//!
//! Domain entities for the session timer.

pub mod session;
pub mod extend_option;

// Re-export all entities
pub use session::{is_truthy, ExtendCommand, ExtendedSession, SessionRecord, SessionTimer};
pub use extend_option::{ExtendOption, EXTEND_OPTIONS};
