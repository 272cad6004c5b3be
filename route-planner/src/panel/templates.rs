//! Askama templates for the info panel and map popups.
//!
//! All interpolated values are HTML-escaped; addresses and search labels
//! come from external services.

use askama::Template;

use crate::domain::{PointSlot, TransportMode};
use crate::geocode::PlaceInfo;
use crate::metrics::TravelMetrics;

/// Address block for one endpoint.
#[derive(Template)]
#[template(path = "place_info.html")]
pub struct PlaceInfoTemplate {
    pub slot_id: &'static str,
    pub heading: &'static str,
    pub address: String,
    pub neighbourhood: String,
    pub postcode: String,
    pub municipality: String,
}

impl PlaceInfoTemplate {
    pub fn new(slot: PointSlot, place: &PlaceInfo) -> Self {
        Self {
            slot_id: slot_id(slot),
            heading: slot.label(),
            address: place.display_name_or_placeholder().to_string(),
            neighbourhood: place.neighbourhood_or_placeholder().to_string(),
            postcode: place.postcode_or_placeholder().to_string(),
            municipality: place.municipality_or_placeholder().to_string(),
        }
    }
}

/// Placeholder block when the address lookup failed.
#[derive(Template)]
#[template(path = "place_unavailable.html")]
pub struct PlaceUnavailableTemplate {
    pub slot_id: &'static str,
    pub heading: &'static str,
}

impl PlaceUnavailableTemplate {
    pub fn new(slot: PointSlot) -> Self {
        Self {
            slot_id: slot_id(slot),
            heading: slot.label(),
        }
    }
}

/// Distance, time, speed and fuel for the current route.
#[derive(Template)]
#[template(path = "route_summary.html")]
pub struct RouteSummaryTemplate {
    pub mode: &'static str,
    pub distance_km: String,
    pub time_minutes: String,
    pub speed_kmh: String,
    pub fuel_liters: Option<String>,
    pub manhattan_note: Option<String>,
}

impl RouteSummaryTemplate {
    pub fn new(mode: TransportMode, metrics: &TravelMetrics, manhattan_note: Option<&str>) -> Self {
        Self {
            mode: mode.label(),
            distance_km: format!("{:.2}", metrics.distance_km),
            time_minutes: format!("{:.1}", metrics.time_minutes),
            speed_kmh: format!("{:.1}", metrics.speed_kmh),
            fuel_liters: metrics.fuel_liters.map(|f| format!("{f:.2}")),
            manhattan_note: manhattan_note.map(str::to_string),
        }
    }
}

/// Popup on the transient search marker.
#[derive(Template)]
#[template(path = "search_popup.html")]
pub struct SearchPopupTemplate {
    pub label: String,
}

fn slot_id(slot: PointSlot) -> &'static str {
    match slot {
        PointSlot::Origin => "origin",
        PointSlot::Destination => "destination",
    }
}
