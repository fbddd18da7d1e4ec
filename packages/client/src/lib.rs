//! CLI client for the Chukei message relay.
//!
//! Connects to a relay server over WebSocket, sends JSON chat messages typed
//! on stdin, and prints every relayed frame. The client's own messages come
//! back too, carrying the server-stamped `time` field.

mod domain;
mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use error::ClientError;
pub use runner::run_client;
