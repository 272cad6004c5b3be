//! In-memory map surface.
//!
//! Keeps every live layer and the current viewport, so the rendering flow
//! can run headless (console driver, tests).

use std::collections::BTreeMap;

use tracing::{trace, warn};

use crate::domain::{Bounds, GeoPoint};

use super::map::{LayerId, LineStyle, MapSurface, MarkerStyle};

/// A layer currently on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Marker {
        at: GeoPoint,
        style: MarkerStyle,
        popup: Option<String>,
    },
    Polyline {
        path: Vec<GeoPoint>,
        style: LineStyle,
    },
}

/// The most recent viewport change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Center { center: GeoPoint, zoom: u8 },
    Fit { bounds: Bounds, padding: (u32, u32) },
}

/// Map surface that records layers instead of drawing them.
#[derive(Debug, Clone)]
pub struct RecordingMap {
    layers: BTreeMap<LayerId, Layer>,
    next_id: u64,
    viewport: Viewport,
}

impl RecordingMap {
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            layers: BTreeMap::new(),
            next_id: 1,
            viewport: Viewport::Center { center, zoom },
        }
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.layers.iter().map(|(id, layer)| (*id, layer))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Live polylines drawn with `style`.
    pub fn polylines(&self, style: LineStyle) -> Vec<&[GeoPoint]> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Polyline { path, style: s } if *s == style => Some(path.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Live markers drawn with `style`.
    pub fn markers(&self, style: MarkerStyle) -> Vec<GeoPoint> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Marker { at, style: s, .. } if *s == style => Some(*at),
                _ => None,
            })
            .collect()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn insert(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        trace!(%id, ?layer, "layer added");
        self.layers.insert(id, layer);
        id
    }
}

impl MapSurface for RecordingMap {
    fn add_marker(&mut self, at: GeoPoint, style: MarkerStyle) -> LayerId {
        self.insert(Layer::Marker {
            at,
            style,
            popup: None,
        })
    }

    fn add_polyline(&mut self, path: &[GeoPoint], style: LineStyle) -> LayerId {
        self.insert(Layer::Polyline {
            path: path.to_vec(),
            style,
        })
    }

    fn remove_layer(&mut self, id: LayerId) {
        if self.layers.remove(&id).is_some() {
            trace!(%id, "layer removed");
        }
    }

    fn open_popup(&mut self, id: LayerId, html: &str) {
        match self.layers.get_mut(&id) {
            Some(Layer::Marker { popup, .. }) => *popup = Some(html.to_string()),
            Some(Layer::Polyline { .. }) => warn!(%id, "popups are only supported on markers"),
            None => warn!(%id, "popup for unknown layer"),
        }
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding: (u32, u32)) {
        self.viewport = Viewport::Fit { bounds, padding };
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.viewport = Viewport::Center { center, zoom };
    }
}
