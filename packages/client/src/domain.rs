//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement client-side decision
//! logic without side effects.

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `current_attempt` - The number of reconnection attempts made so far
/// * `max_attempts` - The maximum number of reconnection attempts allowed
///
/// # Returns
///
/// `true` if reconnection should be attempted, `false` otherwise
pub fn should_attempt_reconnect(current_attempt: u32, max_attempts: u32) -> bool {
    current_attempt < max_attempts
}
