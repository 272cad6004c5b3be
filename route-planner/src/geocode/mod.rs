//! Reverse geocoding of endpoints.
//!
//! An external, read-only collaborator: the address of each endpoint is
//! looked up for display only, and any failure degrades to a placeholder.

mod client;
mod error;
mod place;
mod types;

pub use client::{GeocodeClient, GeocodeConfig, ReverseGeocoder};
pub use error::GeocodeError;
pub use place::{NOT_AVAILABLE, PlaceInfo};
pub use types::{AddressDto, ReverseResponse};
