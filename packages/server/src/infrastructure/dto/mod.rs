//! Data Transfer Objects (DTOs) for the relay server.
//!
//! The relayed payload itself is schemaless (see `domain::Envelope`), so the
//! only DTOs here are HTTP API response bodies.

pub mod http;
