//! Transport modes and their fixed travel constants.

use std::fmt;

use super::error::DomainError;

/// Average car speed: 30 km/h.
const CAR_METERS_PER_MINUTE: f64 = 500.0;

/// Average bike speed: 15 km/h.
const BIKE_METERS_PER_MINUTE: f64 = 250.0;

/// Average walking speed: roughly 4 km/h.
const PEDESTRIAN_METERS_PER_MINUTE: f64 = 67.0;

/// Car fuel consumption: 10 km per litre.
const CAR_LITERS_PER_KM: f64 = 0.1;

/// How the user intends to travel between the two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Car,
    Bike,
    Pedestrian,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Car,
        TransportMode::Bike,
        TransportMode::Pedestrian,
    ];

    /// Average speed in meters per minute.
    pub fn meters_per_minute(self) -> f64 {
        match self {
            TransportMode::Car => CAR_METERS_PER_MINUTE,
            TransportMode::Bike => BIKE_METERS_PER_MINUTE,
            TransportMode::Pedestrian => PEDESTRIAN_METERS_PER_MINUTE,
        }
    }

    /// Fuel consumption in litres per kilometre. Only cars burn fuel.
    pub fn liters_per_km(self) -> Option<f64> {
        match self {
            TransportMode::Car => Some(CAR_LITERS_PER_KM),
            TransportMode::Bike | TransportMode::Pedestrian => None,
        }
    }

    /// Name used by the routing service (`modo` field).
    pub fn wire_name(self) -> &'static str {
        match self {
            TransportMode::Car => "auto",
            TransportMode::Bike => "bici",
            TransportMode::Pedestrian => "peaton",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bike => "bike",
            TransportMode::Pedestrian => "pedestrian",
        }
    }

    /// Parse a mode picker value.
    ///
    /// An empty (or all-whitespace) value means "no mode" and yields
    /// `Ok(None)`. Both the routing service names and the English labels are
    /// accepted, case-insensitively.
    pub fn from_selection(value: &str) -> Result<Option<Self>, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }

        match value.to_ascii_lowercase().as_str() {
            "auto" | "car" => Ok(Some(TransportMode::Car)),
            "bici" | "bike" => Ok(Some(TransportMode::Bike)),
            "peaton" | "pedestrian" | "walk" => Ok(Some(TransportMode::Pedestrian)),
            "none" => Ok(None),
            _ => Err(DomainError::UnknownMode(value.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
