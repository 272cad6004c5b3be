//! Route requests and results.

use super::{GeoPoint, TransportMode};

/// Everything the routing service needs to compute one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub mode: TransportMode,
}

/// A routed path plus its optional grid-distance approximation.
///
/// Produced per request and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// The actual routed path.
    pub path: Vec<GeoPoint>,

    /// Length of `path` in meters, as reported by the routing service.
    pub distance_meters: f64,

    /// Manhattan approximation, absent when the service could not build one.
    pub manhattan_path: Option<Vec<GeoPoint>>,

    /// Informational note about the Manhattan approximation.
    pub manhattan_note: Option<String>,
}

impl RouteResult {
    /// The Manhattan path if it has at least one point.
    ///
    /// An empty path and an absent path are treated the same.
    pub fn drawable_manhattan(&self) -> Option<&[GeoPoint]> {
        self.manhattan_path
            .as_deref()
            .filter(|path| !path.is_empty())
    }
}
