//! Application-wide constants

/// Remaining seconds at or below which the extend dialog is surfaced.
pub const EXTEND_WARNING_THRESHOLD_SECS: i64 = 60;
/// Countdown cadence.
pub const TICK_INTERVAL_MS: u64 = 1000;

pub const EXTEND_ROUTE: &str = "/api/extend";
pub const VALIDATE_ROUTE: &str = "/api/validate";

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;
