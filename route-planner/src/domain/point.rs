//! Geographic point, endpoint slot and bounding box types.

use std::fmt;

use super::error::DomainError;

/// A WGS84 latitude/longitude pair.
///
/// Points are immutable: an endpoint is changed by replacing its point,
/// never by editing it in place. Any `GeoPoint` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use route_planner::domain::GeoPoint;
///
/// let zocalo = GeoPoint::new(19.4326, -99.1332).unwrap();
/// assert_eq!(zocalo.lat(), 19.4326);
///
/// // Out of range latitude is rejected
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Create a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(DomainError::InvalidCoordinate {
                lat,
                lng,
                reason: "coordinates must be finite",
            });
        }

        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinate {
                lat,
                lng,
                reason: "latitude must be within [-90, 90]",
            });
        }

        if !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinate {
                lat,
                lng,
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(Self { lat, lng })
    }

    /// Build a point from literals known to be in range.
    pub(crate) const fn from_trusted(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// One of the two user-chosen endpoints of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointSlot {
    Origin,
    Destination,
}

impl PointSlot {
    /// Both slots, origin first.
    pub const ALL: [PointSlot; 2] = [PointSlot::Origin, PointSlot::Destination];

    /// Array index of this slot (origin = 0, destination = 1).
    pub fn index(self) -> usize {
        match self {
            PointSlot::Origin => 0,
            PointSlot::Destination => 1,
        }
    }

    /// Human-readable label, also used as the marker title.
    pub fn label(self) -> &'static str {
        match self {
            PointSlot::Origin => "Origin",
            PointSlot::Destination => "Destination",
        }
    }
}

impl fmt::Display for PointSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An axis-aligned lat/lng bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// A degenerate box around a single point.
    pub fn around(point: GeoPoint) -> Self {
        Self {
            south: point.lat(),
            west: point.lng(),
            north: point.lat(),
            east: point.lng(),
        }
    }

    /// Smallest box containing every point, or `None` if there are none.
    pub fn of_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = Bounds::around(*iter.next()?);
        Some(iter.fold(first, |acc, p| acc.extend(*p)))
    }

    /// Grow the box to include `point`.
    pub fn extend(self, point: GeoPoint) -> Self {
        Self {
            south: self.south.min(point.lat()),
            west: self.west.min(point.lng()),
            north: self.north.max(point.lat()),
            east: self.east.max(point.lng()),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(self, other: Bounds) -> Self {
        Self {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }
}
