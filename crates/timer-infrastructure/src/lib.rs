//! # Session Timer Infrastructure
//!
//! Database and upstream service implementations (adapters).

pub mod database;
pub mod upstream;

pub use database::{create_pool, PgSessionRepository};
pub use upstream::HttpSessionGateway;
