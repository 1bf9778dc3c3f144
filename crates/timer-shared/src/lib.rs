//! # Session Timer Shared
//!
//! Configuration, telemetry, and constants shared by the session timer crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
