//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from network and parse errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude/longitude outside the valid range, or not finite
    #[error("invalid coordinate ({lat}, {lng}): {reason}")]
    InvalidCoordinate {
        lat: f64,
        lng: f64,
        reason: &'static str,
    },

    /// Mode picker value that names no known transport mode
    #[error("unknown transport mode: {0}")]
    UnknownMode(String),
}
