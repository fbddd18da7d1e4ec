//! HTTP API response DTOs.

use serde::Serialize;

/// Response body for `GET /api/status`
#[derive(Debug, Serialize)]
pub struct RelayStatusDto {
    /// Number of currently registered connections
    pub connections: usize,
}
