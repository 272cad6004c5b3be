//! Wire types for the routing service `POST /ruta` endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, RouteRequest};

/// A `{lat, lng}` object as the routing service expects it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBody {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeoPoint> for LatLngBody {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: point.lat(),
            lng: point.lng(),
        }
    }
}

/// Request body for `POST /ruta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequestBody {
    pub origen: LatLngBody,
    pub destino: LatLngBody,
    /// `auto`, `bici` or `peaton`
    pub modo: String,
}

impl From<&RouteRequest> for RouteRequestBody {
    fn from(request: &RouteRequest) -> Self {
        Self {
            origen: request.origin.into(),
            destino: request.destination.into(),
            modo: request.mode.wire_name().to_string(),
        }
    }
}

/// Response body for `POST /ruta`.
///
/// Success and error payloads share one shape: an error response carries
/// only `error`, a success response carries `ruta` and `distancia_metros`
/// plus the optional Manhattan fields (which may be `null`, empty or
/// missing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruta: Option<Vec<[f64; 2]>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distancia_metros: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruta_manhattan: Option<Vec<[f64; 2]>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensaje_manhattan: Option<String>,
}
