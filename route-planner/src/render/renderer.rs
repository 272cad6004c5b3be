//! Route renderer.
//!
//! Owns every overlay the planner puts on the map: the two endpoint
//! markers, the transient search marker and the two route polylines. Each
//! overlay is removed before its replacement is drawn, so nothing is left
//! dangling on the map.

use tracing::debug;

use crate::domain::{Bounds, GeoPoint, PointSlot, RouteResult};

use super::config::MapConfig;
use super::map::{LayerId, LineStyle, MapSurface, MarkerStyle};

#[derive(Debug, Clone, Copy)]
struct DrawnLine {
    id: LayerId,
    bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Copy)]
struct DrawnMarker {
    id: LayerId,
    at: GeoPoint,
}

/// Draws endpoints, search results and routes on a [`MapSurface`].
#[derive(Debug)]
pub struct RouteRenderer<M> {
    map: M,
    config: MapConfig,
    route_line: Option<DrawnLine>,
    manhattan_line: Option<DrawnLine>,
    endpoints: [Option<DrawnMarker>; 2],
    search_marker: Option<LayerId>,
}

impl<M: MapSurface> RouteRenderer<M> {
    pub fn new(map: M, config: MapConfig) -> Self {
        Self {
            map,
            config,
            route_line: None,
            manhattan_line: None,
            endpoints: [None, None],
            search_marker: None,
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Replace both route overlays with the ones in `result`.
    ///
    /// The old overlays are always removed first. The routed path is always
    /// drawn; the Manhattan path only when it has points. The viewport is
    /// then fitted to every route overlay and endpoint marker. Endpoint
    /// markers themselves are left alone.
    pub fn render(&mut self, result: &RouteResult) {
        self.clear();

        self.route_line = Some(self.draw_line(&result.path, LineStyle::ROUTE));
        self.manhattan_line = result
            .drawable_manhattan()
            .map(|path| self.draw_line(path, LineStyle::MANHATTAN));

        debug!(
            route_points = result.path.len(),
            manhattan = self.manhattan_line.is_some(),
            "route rendered"
        );
        self.fit_view();
    }

    /// Remove both route overlays. Safe to call when nothing is drawn.
    pub fn clear(&mut self) {
        for line in [self.route_line.take(), self.manhattan_line.take()]
            .into_iter()
            .flatten()
        {
            self.map.remove_layer(line.id);
        }
    }

    pub fn has_route(&self) -> bool {
        self.route_line.is_some()
    }

    pub fn has_manhattan(&self) -> bool {
        self.manhattan_line.is_some()
    }

    /// Put the marker for `slot` at `point`, replacing any previous one.
    pub fn place_endpoint(&mut self, slot: PointSlot, point: GeoPoint) {
        if let Some(old) = self.endpoints[slot.index()].take() {
            self.map.remove_layer(old.id);
        }

        let id = self.map.add_marker(point, MarkerStyle::Endpoint(slot));
        self.endpoints[slot.index()] = Some(DrawnMarker { id, at: point });
    }

    /// Where the marker for `slot` currently is.
    pub fn endpoint(&self, slot: PointSlot) -> Option<GeoPoint> {
        self.endpoints[slot.index()].map(|m| m.at)
    }

    /// Show a search result: one marker with a popup, view centered on it.
    pub fn show_search_result(&mut self, point: GeoPoint, popup_html: &str) {
        self.clear_search_marker();

        let id = self.map.add_marker(point, MarkerStyle::Search);
        self.map.open_popup(id, popup_html);
        self.map.set_view(point, self.config.search_zoom);
        self.search_marker = Some(id);
    }

    /// Remove the search marker. Returns whether there was one.
    pub fn clear_search_marker(&mut self) -> bool {
        match self.search_marker.take() {
            Some(id) => {
                self.map.remove_layer(id);
                true
            }
            None => false,
        }
    }

    pub fn has_search_marker(&self) -> bool {
        self.search_marker.is_some()
    }

    /// Remove every overlay and marker and restore the initial view.
    pub fn reset(&mut self) {
        self.clear();
        self.clear_search_marker();
        for marker in self.endpoints.iter_mut().filter_map(Option::take) {
            self.map.remove_layer(marker.id);
        }
        self.map.set_view(self.config.center, self.config.zoom);
    }

    fn draw_line(&mut self, path: &[GeoPoint], style: LineStyle) -> DrawnLine {
        DrawnLine {
            id: self.map.add_polyline(path, style),
            bounds: Bounds::of_points(path),
        }
    }

    fn fit_view(&mut self) {
        let lines = [self.route_line, self.manhattan_line]
            .into_iter()
            .flatten()
            .filter_map(|line| line.bounds);
        let markers = self.endpoints.iter().flatten().map(|m| Bounds::around(m.at));

        if let Some(bounds) = lines.chain(markers).reduce(Bounds::union) {
            self.map.fit_bounds(bounds, self.config.fit_padding);
        }
    }
}
