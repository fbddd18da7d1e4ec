//! Time-related utilities with clock abstraction for testability.
//!
//! All timestamps in the relay are UTC. The wire form of a receipt time is
//! RFC 3339 with millisecond precision and a trailing `Z`, which matches how
//! relayed messages carry their `time` field.

use chrono::{SecondsFormat, TimeZone, Utc};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp in UTC (milliseconds)
    fn now_utc_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc_millis(&self) -> i64 {
        get_utc_timestamp()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_utc_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// Get current Unix timestamp in UTC (milliseconds)
pub fn get_utc_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to UTC RFC 3339 format with
/// millisecond precision, e.g. `2023-01-01T00:00:00.000Z`
pub fn timestamp_to_utc_rfc3339(timestamp_millis: i64) -> String {
    let dt = Utc.timestamp_millis_opt(timestamp_millis).unwrap();
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
