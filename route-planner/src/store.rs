//! Point and mode store.
//!
//! The single source of truth for the two candidate endpoints and the
//! selected transport mode. It never touches the network or the map.

use crate::domain::{GeoPoint, PointSlot, RouteRequest, TransportMode};

/// Holds the selected transport mode and at most one point per slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    mode: Option<TransportMode>,
    points: [Option<GeoPoint>; 2],
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the transport mode.
    ///
    /// Clearing the mode disables endpoint selection; stored points are kept.
    pub fn set_mode(&mut self, mode: Option<TransportMode>) {
        self.mode = mode;
    }

    pub fn mode(&self) -> Option<TransportMode> {
        self.mode
    }

    /// Whether the endpoint buttons should be enabled.
    pub fn can_select_endpoints(&self) -> bool {
        self.mode.is_some()
    }

    /// Store `point` in `slot`, replacing whatever was there.
    pub fn set_point(&mut self, slot: PointSlot, point: GeoPoint) {
        self.points[slot.index()] = Some(point);
    }

    pub fn point(&self, slot: PointSlot) -> Option<GeoPoint> {
        self.points[slot.index()]
    }

    pub fn both_points_set(&self) -> bool {
        self.points.iter().all(Option::is_some)
    }

    /// A complete route request, if a mode and both endpoints are set.
    pub fn route_request(&self) -> Option<RouteRequest> {
        Some(RouteRequest {
            origin: self.point(PointSlot::Origin)?,
            destination: self.point(PointSlot::Destination)?,
            mode: self.mode?,
        })
    }

    /// Forget the mode and both points.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn point() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng).unwrap())
    }

    fn slot() -> impl Strategy<Value = PointSlot> {
        prop_oneof![Just(PointSlot::Origin), Just(PointSlot::Destination)]
    }

    proptest! {
        /// The last write to a slot wins and never touches the other slot
        #[test]
        fn last_write_wins(writes in prop::collection::vec((slot(), point()), 1..20)) {
            let mut store = PointStore::new();
            for (slot, point) in &writes {
                store.set_point(*slot, *point);
            }

            for slot in PointSlot::ALL {
                let expected = writes.iter().rev().find(|(s, _)| *s == slot).map(|(_, p)| *p);
                prop_assert_eq!(store.point(slot), expected);
            }
        }
    }
}
