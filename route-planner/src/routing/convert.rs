//! Conversion from routing service payloads to domain types.

use crate::domain::{DomainError, GeoPoint, RouteResult};

use super::types::RouteResponseBody;

/// A success payload that cannot be turned into a [`RouteResult`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid point {index} in `{field}`: {source}")]
    InvalidPoint {
        field: &'static str,
        index: usize,
        source: DomainError,
    },

    #[error("invalid distance: {0}")]
    InvalidDistance(f64),
}

/// Convert a success payload. The caller has already ruled out `error`.
pub fn convert_route_response(body: RouteResponseBody) -> Result<RouteResult, ConversionError> {
    let ruta = body.ruta.ok_or(ConversionError::MissingField("ruta"))?;
    let distance_meters = body
        .distancia_metros
        .ok_or(ConversionError::MissingField("distancia_metros"))?;

    if !distance_meters.is_finite() || distance_meters < 0.0 {
        return Err(ConversionError::InvalidDistance(distance_meters));
    }

    let path = convert_path("ruta", &ruta)?;
    let manhattan_path = body
        .ruta_manhattan
        .map(|m| convert_path("ruta_manhattan", &m))
        .transpose()?;

    Ok(RouteResult {
        path,
        distance_meters,
        manhattan_path,
        manhattan_note: body.mensaje_manhattan.filter(|note| !note.trim().is_empty()),
    })
}

fn convert_path(field: &'static str, coords: &[[f64; 2]]) -> Result<Vec<GeoPoint>, ConversionError> {
    coords
        .iter()
        .enumerate()
        .map(|(index, [lat, lng])| {
            GeoPoint::new(*lat, *lng).map_err(|source| ConversionError::InvalidPoint {
                field,
                index,
                source,
            })
        })
        .collect()
}
