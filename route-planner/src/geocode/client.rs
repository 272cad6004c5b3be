//! Reverse-geocoding client.
//!
//! Looks up the address of an endpoint for display. Best effort only: the
//! caller shows a placeholder on any failure.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::domain::GeoPoint;

use super::error::GeocodeError;
use super::place::PlaceInfo;
use super::types::ReverseResponse;

/// Default base URL: public Nominatim.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim's usage policy requires an identifying User-Agent.
const DEFAULT_USER_AGENT: &str = concat!("route-planner/", env!("CARGO_PKG_VERSION"));

/// Something that can describe the place at a point.
pub trait ReverseGeocoder {
    fn reverse(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<PlaceInfo, GeocodeError>> + Send;
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL of the geocoder (without the `/reverse` path)
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Reverse-geocoding HTTP client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| GeocodeError::InvalidUserAgent(config.user_agent.clone()))?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the address details for `point`.
    pub async fn lookup(&self, point: GeoPoint) -> Result<PlaceInfo, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", point.lat().to_string()),
                ("lon", point.lng().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: ReverseResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        debug!(%point, found = parsed.display_name.is_some(), "reverse geocoded");
        Ok(PlaceInfo::from_response(parsed))
    }
}

impl ReverseGeocoder for GeocodeClient {
    fn reverse(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<PlaceInfo, GeocodeError>> + Send {
        self.lookup(point)
    }
}
