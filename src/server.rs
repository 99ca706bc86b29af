//! HTTP layer exposing the analyzer and serving the frontend assets.

use std::any::Any;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};

use crate::analyze_text;
use crate::models::Report;

/// Request body for `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// JSON payload returned for both 400 and 500 responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Errors surfaced at the HTTP boundary.
///
/// The pipeline itself is total over string input, so these only cover the
/// collaborator concerns: an unreadable request, and the defensive catch-all
/// for anything unexpected while serving one.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carried no parseable JSON body.
    #[error("No JSON data provided")]
    BadRequest,

    /// Unexpected failure while serving a request.
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, details) = match self {
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, None),
            ApiError::Internal(ref details) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(details.clone()))
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// `POST /api/analyze` handler.
///
/// A missing or malformed JSON body is a 400. A missing, empty, or
/// whitespace-only `text` field is a valid zero-result analysis and returns
/// the all-zero report with status 200.
async fn analyze(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Report>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected analyze request: {rejection}");
        ApiError::BadRequest
    })?;

    Ok(Json(analyze_text(request.text.trim())))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Unhandled panic while serving request: {details}");
    ApiError::Internal(details).into_response()
}

/// Builds the application router: the analyze endpoint, plus static file
/// serving with an `index.html` fallback for every other path so the
/// single-page frontend handles its own routing.
pub fn app(static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/analyze", post(analyze))
        .fallback_service(spa)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Binds the listener and serves the app until the process exits.
pub async fn serve(addr: SocketAddr, static_dir: PathBuf) -> Result<()> {
    let router = app(&static_dir);

    info!("Starting word-frequency API server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
