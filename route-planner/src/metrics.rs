//! Travel metrics derived from a route distance and a transport mode.
//!
//! Pure functions: no map, no network.

use crate::domain::TransportMode;

/// Display-ready travel metrics.
///
/// Time, speed and distance are rounded to one decimal place (distance in
/// km to two), fuel to two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelMetrics {
    pub distance_km: f64,
    pub time_minutes: f64,
    pub speed_kmh: f64,
    /// Only present for [`TransportMode::Car`].
    pub fuel_liters: Option<f64>,
}

/// Compute time, speed and fuel for travelling `distance_meters` by `mode`.
///
/// # Examples
///
/// ```
/// use route_planner::domain::TransportMode;
/// use route_planner::metrics::compute_metrics;
///
/// let m = compute_metrics(30_000.0, TransportMode::Car);
/// assert_eq!(m.time_minutes, 60.0);
/// assert_eq!(m.speed_kmh, 30.0);
/// assert_eq!(m.fuel_liters, Some(3.0));
/// ```
pub fn compute_metrics(distance_meters: f64, mode: TransportMode) -> TravelMetrics {
    let speed = mode.meters_per_minute();
    let distance_km = distance_meters / 1000.0;

    TravelMetrics {
        distance_km: round_to(distance_km, 2),
        time_minutes: round_to(distance_meters / speed, 1),
        speed_kmh: round_to(speed * 60.0 / 1000.0, 1),
        fuel_liters: mode
            .liters_per_km()
            .map(|rate| round_to(distance_km * rate, 2)),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
