//! Domain layer: message payloads, connection identity, and the registry
//! interface the rest of the server depends on.

mod connection;
mod envelope;
mod registry;

pub use connection::ConnectionId;
pub use envelope::{Envelope, EnvelopeError};
pub use registry::{ConnectionRegistry, FrameSender};

#[cfg(test)]
pub use registry::MockConnectionRegistry;
