//! WebSocket message relay server library.
//!
//! Clients connect over WebSocket and send JSON object messages. The server
//! stamps each message with its receipt time and broadcasts it to every
//! connected client, including the sender.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
