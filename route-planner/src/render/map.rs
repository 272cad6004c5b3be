//! The map surface the renderer draws on.
//!
//! Tile rendering and base layers belong to the mapping library; this trait
//! is the narrow slice of it that route rendering needs.

use std::fmt;

use crate::domain::{Bounds, GeoPoint, PointSlot};

/// Handle to a layer added to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Which kind of marker to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Origin or destination marker, titled with the slot label.
    Endpoint(PointSlot),
    /// Transient marker for an address search result.
    Search,
}

/// Stroke style for a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: u8,
    pub dash: Option<&'static str>,
}

impl LineStyle {
    /// The routed path.
    pub const ROUTE: LineStyle = LineStyle {
        color: "blue",
        weight: 5,
        dash: None,
    };

    /// The Manhattan approximation.
    pub const MANHATTAN: LineStyle = LineStyle {
        color: "red",
        weight: 4,
        dash: Some("6,6"),
    };
}

/// A map that can hold markers and polylines and move its viewport.
pub trait MapSurface {
    fn add_marker(&mut self, at: GeoPoint, style: MarkerStyle) -> LayerId;

    fn add_polyline(&mut self, path: &[GeoPoint], style: LineStyle) -> LayerId;

    /// Remove a layer. Unknown ids are ignored.
    fn remove_layer(&mut self, id: LayerId);

    /// Attach an HTML popup to a layer and open it.
    fn open_popup(&mut self, id: LayerId, html: &str);

    /// Fit the viewport to `bounds`, keeping `padding` pixels free on each side.
    fn fit_bounds(&mut self, bounds: Bounds, padding: (u32, u32));

    fn set_view(&mut self, center: GeoPoint, zoom: u8);
}
