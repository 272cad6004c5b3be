//! Route client error types.

use super::convert::ConversionError;

/// Message shown for every failure that is not an explicit service error.
const GENERIC_FAILURE: &str =
    "Could not calculate the route. Check the connection or the selected points.";

/// Errors from the route client.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The routing service answered with an `{ "error": ... }` payload
    #[error("routing service error: {0}")]
    Service(String),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status without a structured error payload
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON for the expected shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Well-formed JSON with unusable contents
    #[error("malformed route response: {0}")]
    Malformed(#[from] ConversionError),
}

impl RouteError {
    /// Whether this is an explicit error reported by the routing service,
    /// as opposed to a transport or parse failure.
    pub fn is_service_error(&self) -> bool {
        matches!(self, RouteError::Service(_))
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            RouteError::Service(message) => format!("Error calculating the route: {message}"),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
