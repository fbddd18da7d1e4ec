//! UseCase layer: the per-frame relay pipeline.

mod error;
mod relay_message;

pub use error::RelayError;
pub use relay_message::RelayMessageUseCase;
