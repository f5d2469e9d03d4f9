//! HTTP API handlers.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ApiError;

/// Version reported by the health endpoint.
pub const API_VERSION: &str = "0.0.1";

/// Description returned by the media index.
pub const MEDIA_MESSAGE: &str = "Media API endpoints will be implemented here";

/// Media routes announced by the media index. None of them is routed yet.
pub const PLANNED_MEDIA_ENDPOINTS: [&str; 4] = [
    "GET /api/media",
    "GET /api/media/:id",
    "GET /api/media/:id/stream",
    "POST /api/media/scan",
];

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Time the response was produced, RFC 3339 in UTC with milliseconds.
    pub timestamp: String,
    /// API version.
    pub version: &'static str,
}

/// Media index response.
#[derive(Debug, Serialize)]
pub struct MediaIndexResponse {
    /// Human readable note.
    pub message: &'static str,
    /// Planned routes, in announcement order.
    pub endpoints: Vec<&'static str>,
}

/// Current UTC time in the `2024-05-01T12:00:00.000Z` form.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Health check handler - always returns 200.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: now_timestamp(),
        version: API_VERSION,
    })
}

/// Media index handler - describes the routes the media API will expose.
pub async fn media_index() -> Json<MediaIndexResponse> {
    Json(MediaIndexResponse {
        message: MEDIA_MESSAGE,
        endpoints: PLANNED_MEDIA_ENDPOINTS.to_vec(),
    })
}

/// Fallback for unmatched paths and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
