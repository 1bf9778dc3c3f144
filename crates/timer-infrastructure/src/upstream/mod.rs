//! Upstream session service adapters

mod http_gateway;

pub use http_gateway::HttpSessionGateway;
