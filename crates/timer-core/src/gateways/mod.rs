//! Gateway traits (ports) to external services

pub mod session_gateway;

pub use session_gateway::SessionGateway;
