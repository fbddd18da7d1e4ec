//! Infrastructure layer: concrete registry implementation and protocol DTOs.

pub mod dto;
pub mod registry;
