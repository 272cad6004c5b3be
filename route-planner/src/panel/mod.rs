//! The info panel beside the map.
//!
//! Holds the status line, one address block per endpoint and the summary
//! of the current route. Rendering to HTML goes through askama templates.

pub mod templates;

use askama::Template;

use crate::domain::{PointSlot, TransportMode};
use crate::geocode::PlaceInfo;
use crate::metrics::TravelMetrics;

use templates::{PlaceInfoTemplate, PlaceUnavailableTemplate, RouteSummaryTemplate};

/// What the status line tells the user to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLine {
    #[default]
    ChooseMode,
    ChooseEndpoint,
    AwaitingClick(PointSlot),
    PointsSelected,
}

impl StatusLine {
    pub fn text(self) -> &'static str {
        match self {
            StatusLine::ChooseMode => "Select a transport mode before choosing points.",
            StatusLine::ChooseEndpoint => {
                "You can now choose origin or destination. Click the map or search for an address."
            }
            StatusLine::AwaitingClick(PointSlot::Origin) => "Click the map to choose the origin.",
            StatusLine::AwaitingClick(PointSlot::Destination) => {
                "Click the map to choose the destination."
            }
            StatusLine::PointsSelected => {
                "Points selected. To change one, use the Origin/Destination buttons."
            }
        }
    }
}

/// Address block for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceBlock {
    Found(PlaceInfo),
    /// The lookup failed; shown as a placeholder.
    Unavailable,
}

impl PlaceBlock {
    pub fn render_html(&self, slot: PointSlot) -> Result<String, askama::Error> {
        match self {
            PlaceBlock::Found(place) => PlaceInfoTemplate::new(slot, place).render(),
            PlaceBlock::Unavailable => PlaceUnavailableTemplate::new(slot).render(),
        }
    }

    /// Plain-text rendering, one field per line.
    pub fn lines(&self, slot: PointSlot) -> Vec<String> {
        match self {
            PlaceBlock::Found(place) => vec![
                format!("{slot}: {}", place.display_name_or_placeholder()),
                format!("  neighbourhood: {}", place.neighbourhood_or_placeholder()),
                format!("  postcode: {}", place.postcode_or_placeholder()),
                format!("  municipality: {}", place.municipality_or_placeholder()),
            ],
            PlaceBlock::Unavailable => vec![format!("{slot}: information not available")],
        }
    }
}

/// Metrics of the route currently on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub mode: TransportMode,
    pub metrics: TravelMetrics,
    /// Informational note about the Manhattan approximation.
    pub manhattan_note: Option<String>,
}

impl RouteSummary {
    pub fn render_html(&self) -> Result<String, askama::Error> {
        RouteSummaryTemplate::new(self.mode, &self.metrics, self.manhattan_note.as_deref()).render()
    }

    pub fn lines(&self) -> Vec<String> {
        let m = &self.metrics;
        let mut lines = vec![
            format!("distance: {:.2} km", m.distance_km),
            format!("estimated time ({}): {:.1} minutes", self.mode, m.time_minutes),
            format!("speed ({}): {:.1} km/h", self.mode, m.speed_kmh),
        ];
        if let Some(fuel) = m.fuel_liters {
            lines.push(format!("fuel consumption: {fuel:.2} litres"));
        }
        if let Some(note) = &self.manhattan_note {
            lines.push(format!("manhattan: {note}"));
        }
        lines
    }
}

/// Everything shown in the info panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoPanel {
    status: StatusLine,
    places: [Option<PlaceBlock>; 2],
    summary: Option<RouteSummary>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusLine {
        self.status
    }

    pub fn set_status(&mut self, status: StatusLine) {
        self.status = status;
    }

    pub fn place(&self, slot: PointSlot) -> Option<&PlaceBlock> {
        self.places[slot.index()].as_ref()
    }

    /// Replace the address block of `slot`.
    pub fn set_place(&mut self, slot: PointSlot, block: PlaceBlock) {
        self.places[slot.index()] = Some(block);
    }

    pub fn summary(&self) -> Option<&RouteSummary> {
        self.summary.as_ref()
    }

    pub fn set_summary(&mut self, summary: RouteSummary) {
        self.summary = Some(summary);
    }

    pub fn clear_summary(&mut self) {
        self.summary = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The whole panel as an HTML fragment.
    pub fn render_html(&self) -> Result<String, askama::Error> {
        let mut html = format!("<p>{}</p>\n", self.status.text());
        for slot in PointSlot::ALL {
            if let Some(block) = self.place(slot) {
                html.push_str(&block.render_html(slot)?);
                html.push('\n');
            }
        }
        if let Some(summary) = &self.summary {
            html.push_str(&summary.render_html()?);
        }
        Ok(html)
    }

    /// The whole panel as plain text lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.status.text().to_string()];
        for slot in PointSlot::ALL {
            if let Some(block) = self.place(slot) {
                lines.extend(block.lines(slot));
            }
        }
        if let Some(summary) = &self.summary {
            lines.extend(summary.lines());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;

    #[test]
    fn starts_asking_for_mode() {
        let panel = InfoPanel::new();
        assert_eq!(panel.status(), StatusLine::ChooseMode);
        assert_eq!(
            panel.lines(),
            vec!["Select a transport mode before choosing points.".to_string()]
        );
    }

    #[test]
    fn place_blocks_replace() {
        let mut panel = InfoPanel::new();
        panel.set_place(PointSlot::Origin, PlaceBlock::Unavailable);
        panel.set_place(
            PointSlot::Origin,
            PlaceBlock::Found(PlaceInfo {
                display_name: Some("Zócalo".into()),
                ..Default::default()
            }),
        );

        let html = panel.render_html().unwrap();
        assert_eq!(html.matches("id=\"info-origin\"").count(), 1);
        assert!(html.contains("Zócalo"));
        assert!(!html.contains("Information not available."));
    }

    #[test]
    fn full_panel_html() {
        let mut panel = InfoPanel::new();
        panel.set_status(StatusLine::PointsSelected);
        panel.set_place(PointSlot::Destination, PlaceBlock::Unavailable);
        panel.set_place(
            PointSlot::Origin,
            PlaceBlock::Found(PlaceInfo {
                postcode: Some("06000".into()),
                ..Default::default()
            }),
        );
        panel.set_summary(RouteSummary {
            mode: TransportMode::Pedestrian,
            metrics: compute_metrics(670.0, TransportMode::Pedestrian),
            manhattan_note: None,
        });

        let html = panel.render_html().unwrap();

        assert!(html.starts_with(&format!("<p>{}</p>", StatusLine::PointsSelected.text())));
        let origin = html.find("id=\"info-origin\"").unwrap();
        let destination = html.find("id=\"info-destination\"").unwrap();
        let summary = html.find("id=\"info-time\"").unwrap();
        assert!(origin < destination && destination < summary);
        assert!(html.contains("06000"));
        assert!(html.contains("10.0 minutes"));
        assert!(!html.contains("Fuel consumption"));
        assert!(!html.contains("class=\"note\""));
    }

    #[test]
    fn summary_lines() {
        let summary = RouteSummary {
            mode: TransportMode::Car,
            metrics: compute_metrics(30_000.0, TransportMode::Car),
            manhattan_note: Some("approximation unavailable".into()),
        };

        assert_eq!(
            summary.lines(),
            vec![
                "distance: 30.00 km",
                "estimated time (car): 60.0 minutes",
                "speed (car): 30.0 km/h",
                "fuel consumption: 3.00 litres",
                "manhattan: approximation unavailable",
            ]
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut panel = InfoPanel::new();
        panel.set_status(StatusLine::PointsSelected);
        panel.set_place(PointSlot::Destination, PlaceBlock::Unavailable);
        panel.set_summary(RouteSummary {
            mode: TransportMode::Bike,
            metrics: compute_metrics(100.0, TransportMode::Bike),
            manhattan_note: None,
        });

        panel.reset();

        assert_eq!(panel, InfoPanel::new());
    }
}
