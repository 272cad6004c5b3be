//! Domain types for the route planner.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod error;
mod mode;
mod point;
mod route;

pub use error::DomainError;
pub use mode::TransportMode;
pub use point::{Bounds, GeoPoint, PointSlot};
pub use route::{RouteRequest, RouteResult};
