//! Route planner.
//!
//! An interactive map session: the user picks a transport mode, places an
//! origin and a destination, and the session asks a routing service for the
//! route between them. The route is drawn on the map together with its
//! Manhattan approximation, and travel time, average speed and (for cars)
//! fuel use are shown in an info panel.
//!
//! The map itself sits behind [`render::MapSurface`]; the routing service
//! and the reverse geocoder sit behind [`routing::RouteService`] and
//! [`geocode::ReverseGeocoder`].

pub mod config;
pub mod console;
pub mod domain;
pub mod geocode;
pub mod metrics;
pub mod panel;
pub mod render;
pub mod routing;
pub mod selection;
pub mod session;
pub mod store;
