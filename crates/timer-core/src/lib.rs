//! # Session Timer Core
//!
//! Domain entities, the countdown state machine, ports, and services for the
//! session timer.

pub mod domain;
pub mod countdown;
pub mod services;
pub mod repositories;
pub mod gateways;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
