//! Routing service client.
//!
//! The route itself is computed server-side; this module only sends the two
//! endpoints and the transport mode to `POST /ruta` and turns the answer
//! into domain types.
//!
//! Key characteristics of the routing service:
//! - Success and error responses are both JSON; an `error` field marks a
//!   failure even when the HTTP status is 200
//! - The Manhattan approximation may be missing, `null` or empty, which is
//!   a normal outcome and never an error

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{RouteClient, RouteClientConfig, RouteService};
pub use convert::{ConversionError, convert_route_response};
pub use error::RouteError;
pub use types::{LatLngBody, RouteRequestBody, RouteResponseBody};
