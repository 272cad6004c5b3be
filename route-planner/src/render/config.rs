//! Map view configuration.

use crate::domain::GeoPoint;

/// Mexico City, Zócalo.
const DEFAULT_CENTER: GeoPoint = GeoPoint::from_trusted(19.4326, -99.1332);

/// Initial view and viewport behaviour of the map.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Initial map center.
    pub center: GeoPoint,

    /// Initial zoom level.
    pub zoom: u8,

    /// Pixels kept free around fitted routes (x, y).
    pub fit_padding: (u32, u32),

    /// Zoom level used when centering on a search result.
    pub search_zoom: u8,
}

impl MapConfig {
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            ..Self::default()
        }
    }

    pub fn with_fit_padding(mut self, x: u32, y: u32) -> Self {
        self.fit_padding = (x, y);
        self
    }

    pub fn with_search_zoom(mut self, zoom: u8) -> Self {
        self.search_zoom = zoom;
        self
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: 13,
            fit_padding: (50, 50),
            search_zoom: 16,
        }
    }
}
