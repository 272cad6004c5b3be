//! HTTP client for the routing service.
//!
//! Posts the two endpoints and the transport mode to `/ruta` and normalizes
//! the answer into a [`RouteResult`] or a [`RouteError`]. There is no retry
//! and no caching: every call is one request.

use std::future::Future;

use tracing::{debug, warn};

use crate::domain::{RouteRequest, RouteResult};

use super::convert::convert_route_response;
use super::error::RouteError;
use super::types::{RouteRequestBody, RouteResponseBody};

/// Default base URL: the routing service on its usual local port.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of body characters kept in parse errors.
const MAX_ERROR_BODY: usize = 500;

/// Something that can compute a route between two endpoints.
///
/// This abstraction allows the session to be tested without a server.
pub trait RouteService {
    fn request_route(
        &self,
        request: &RouteRequest,
    ) -> impl Future<Output = Result<RouteResult, RouteError>> + Send;
}

/// Configuration for the route client.
#[derive(Debug, Clone)]
pub struct RouteClientConfig {
    /// Base URL of the routing service (without the `/ruta` path)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RouteClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RouteClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Routing service client.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteClient {
    pub fn new(config: RouteClientConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post one route request and interpret the response.
    ///
    /// A payload carrying `error` becomes [`RouteError::Service`] whatever the
    /// HTTP status. Any other non-success status is an [`RouteError::Api`].
    pub async fn fetch_route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        let url = format!("{}/ruta", self.base_url);
        let body = RouteRequestBody::from(request);

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            mode = request.mode.wire_name(),
            "requesting route"
        );

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let parsed = serde_json::from_str::<RouteResponseBody>(&text);

        if let Ok(RouteResponseBody {
            error: Some(message),
            ..
        }) = &parsed
        {
            warn!(status = status.as_u16(), error = %message, "routing service reported an error");
            return Err(RouteError::Service(message.clone()));
        }

        if !status.is_success() {
            return Err(RouteError::Api {
                status: status.as_u16(),
                message: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let parsed = parsed.map_err(|e| RouteError::Json {
            message: e.to_string(),
            body: Some(text.chars().take(MAX_ERROR_BODY).collect()),
        })?;

        let result = convert_route_response(parsed)?;
        debug!(
            points = result.path.len(),
            distance_m = result.distance_meters,
            manhattan = result.drawable_manhattan().is_some(),
            "route received"
        );
        Ok(result)
    }
}

impl RouteService for RouteClient {
    fn request_route(
        &self,
        request: &RouteRequest,
    ) -> impl Future<Output = Result<RouteResult, RouteError>> + Send {
        self.fetch_route(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, TransportMode};
    use crate::routing::mock::MockRouteService;
    use axum::http::StatusCode;
    use serde_json::json;

    fn request() -> RouteRequest {
        RouteRequest {
            origin: GeoPoint::new(19.4326, -99.1332).unwrap(),
            destination: GeoPoint::new(19.3600, -99.1800).unwrap(),
            mode: TransportMode::Car,
        }
    }

    async fn client_for(mock: &MockRouteService) -> RouteClient {
        let addr = mock.clone().spawn().await.unwrap();
        RouteClient::new(RouteClientConfig::default().with_base_url(format!("http://{addr}/")))
            .unwrap()
    }

    #[test]
    fn config_builder() {
        let config = RouteClientConfig::new("http://localhost:8080")
            .with_base_url("http://localhost:9000")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = RouteClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn trailing_slash_trimmed() {
        let client = RouteClient::new(RouteClientConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn posts_request_body() {
        let mock = MockRouteService::new(json!({
            "ruta": [[19.4326, -99.1332], [19.40, -99.15], [19.36, -99.18]],
            "distancia_metros": 9876.5,
            "ruta_manhattan": [[19.4326, -99.1332], [19.4326, -99.18], [19.36, -99.18]],
            "mensaje_manhattan": null
        }));
        let client = client_for(&mock).await;

        let result = client.request_route(&request()).await.unwrap();

        assert_eq!(result.path.len(), 3);
        assert_eq!(result.distance_meters, 9876.5);
        assert_eq!(result.drawable_manhattan().map(<[_]>::len), Some(3));

        let received = mock.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], RouteRequestBody::from(&request()));
        assert_eq!(received[0].modo, "auto");
    }

    #[tokio::test]
    async fn missing_manhattan_is_not_an_error() {
        let mock = MockRouteService::new(json!({
            "ruta": [[19.4326, -99.1332], [19.36, -99.18]],
            "distancia_metros": 1000.0,
            "mensaje_manhattan": "No Manhattan route: nodes are not connected by orthogonal streets."
        }));
        let client = client_for(&mock).await;

        let result = client.request_route(&request()).await.unwrap();

        assert!(result.manhattan_path.is_none());
        assert!(result.manhattan_note.unwrap().starts_with("No Manhattan route"));
    }

    #[tokio::test]
    async fn error_payload_is_service_error() {
        let mock = MockRouteService::new(json!({"error": "no path between nodes"}));
        let client = client_for(&mock).await;

        let err = client.request_route(&request()).await.unwrap_err();
        assert!(matches!(err, RouteError::Service(ref m) if m == "no path between nodes"));
    }

    #[tokio::test]
    async fn error_payload_with_failure_status() {
        let mock = MockRouteService::new(json!({}));
        mock.set_reply_status(StatusCode::BAD_REQUEST, json!({"error": "bad points"}).to_string())
            .await;
        let client = client_for(&mock).await;

        let err = client.request_route(&request()).await.unwrap_err();
        assert!(err.is_service_error());
    }

    #[tokio::test]
    async fn server_error_without_payload() {
        let mock = MockRouteService::new(json!({}));
        mock.set_reply_status(StatusCode::INTERNAL_SERVER_ERROR, "<h1>Internal Server Error</h1>".into())
            .await;
        let client = client_for(&mock).await;

        let err = client.request_route(&request()).await.unwrap_err();
        assert!(matches!(err, RouteError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn garbage_body_is_json_error() {
        let mock = MockRouteService::new(json!({}));
        mock.set_reply_status(StatusCode::OK, "not json".into()).await;
        let client = client_for(&mock).await;

        let err = client.request_route(&request()).await.unwrap_err();
        assert!(matches!(err, RouteError::Json { .. }));
    }

    #[tokio::test]
    async fn incomplete_payload_is_malformed() {
        let mock = MockRouteService::new(json!({"ruta": []}));
        let client = client_for(&mock).await;

        let err = client.request_route(&request()).await.unwrap_err();
        assert!(matches!(err, RouteError::Malformed(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_http_error() {
        // Bind and immediately drop a listener to get a port nobody serves.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RouteClient::new(
            RouteClientConfig::new(format!("http://{addr}")).with_timeout(2),
        )
        .unwrap();

        let err = client.request_route(&request()).await.unwrap_err();
        assert!(matches!(err, RouteError::Http(_)));
        assert!(!err.is_service_error());
    }
}
