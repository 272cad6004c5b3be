//! In-process mock of the routing service.
//!
//! Serves `POST /ruta` with a canned reply and records every request body,
//! so the client and the console can run without the real routing backend.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tokio::sync::RwLock;
use tracing::{debug, error};

use super::types::RouteRequestBody;

/// Errors loading a mock reply from disk.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
enum Reply {
    Json(serde_json::Value),
    Raw { status: StatusCode, body: String },
}

/// Mock routing service that answers every request with the same reply.
#[derive(Clone)]
pub struct MockRouteService {
    reply: Arc<RwLock<Reply>>,
    received: Arc<RwLock<Vec<RouteRequestBody>>>,
}

impl MockRouteService {
    /// Answer every request with `200 OK` and this JSON payload.
    pub fn new(reply: serde_json::Value) -> Self {
        Self {
            reply: Arc::new(RwLock::new(Reply::Json(reply))),
            received: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Load the JSON reply from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MockError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MockError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let reply = serde_json::from_str(&json).map_err(|source| MockError::Json {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self::new(reply))
    }

    /// Replace the JSON reply.
    pub async fn set_reply(&self, reply: serde_json::Value) {
        *self.reply.write().await = Reply::Json(reply);
    }

    /// Answer with an arbitrary status and body (for failure tests).
    pub async fn set_reply_status(&self, status: StatusCode, body: String) {
        *self.reply.write().await = Reply::Raw { status, body };
    }

    /// Request bodies received so far, oldest first.
    pub async fn received(&self) -> Vec<RouteRequestBody> {
        self.received.read().await.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/ruta", post(ruta))
            .with_state(self.clone())
    }

    /// Serve on an ephemeral localhost port in a background task.
    pub async fn spawn(self) -> std::io::Result<SocketAddr> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = self.router();

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!(error = %e, "mock routing service stopped");
            }
        });

        debug!(%addr, "mock routing service listening");
        Ok(addr)
    }
}

async fn ruta(
    State(mock): State<MockRouteService>,
    Json(body): Json<RouteRequestBody>,
) -> Response {
    debug!(modo = %body.modo, "mock route request");
    mock.received.write().await.push(body);

    match mock.reply.read().await.clone() {
        Reply::Json(value) => Json(value).into_response(),
        Reply::Raw { status, body } => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
    }
}
