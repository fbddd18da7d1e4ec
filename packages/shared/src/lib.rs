//! Shared utilities for the chukei workspace.
//!
//! Logging setup and time handling used by both the relay server and the
//! CLI client.

pub mod logger;
pub mod time;
