//! Unified error types for the media server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Startup and runtime errors of the server process.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error (bind, accept, serve).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced to HTTP clients.
///
/// Every failure collapses into one of two fixed JSON bodies; the detail of
/// an internal error only reaches the log stream.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matched the request.
    #[error("not found")]
    NotFound,

    /// Anything that went wrong while producing a response.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Wrap any displayable error as an internal error.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        ApiError::Internal(err.to_string())
    }

    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the body.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::NotFound => "Not Found",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Client-facing error message.
    pub error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!("{}", detail);
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{err:#}"))
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
