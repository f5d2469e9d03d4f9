//! Request logging and panic conversion.

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, info, info_span, Instrument};

use crate::error::ApiError;
use crate::metrics;

/// Log every request on the way in and out, and record request metrics.
///
/// Runs outside CORS and the panic boundary, so preflights, 404s and 500s
/// are logged like any other response.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let span = info_span!("request", %method, %path);

    span.in_scope(|| debug!("--> {} {}", method, path));

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    span.in_scope(|| {
        info!(
            status,
            latency_ms = latency.as_millis() as u64,
            "<-- {} {} {} {}ms",
            method,
            path,
            status,
            latency.as_millis()
        )
    });
    metrics::record_request(method.as_str(), status, latency);

    response
}

/// Turn a handler panic into the generic 500 body.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Internal(format!("panic: {detail}")).into_response()
}
