//! HTTP-level middleware (cross-cutting concerns).
//!
//! Applies to every route, including the fallback:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging / request tracing (TraceLayer)
//! - Body size limit and per-request timeout, both taken from `HttpLimits`
//! - Limit/timeout rejections answered with the `AppError` JSON body

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{
    StatusCode,
    header::{self, HeaderName},
};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::HttpLimits;
use crate::error::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply HTTP-level middleware to the given Router.
pub fn apply(router: Router, limits: &HttpLimits) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // Service errors become responses so the stack stays `Infallible`.
        .layer(HandleErrorLayer::new(handle_error))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(RequestBodyLimitLayer::new(limits.body_limit_bytes))
        .layer(TimeoutLayer::new(limits.request_timeout))
        .layer(TraceLayer::new_for_http());

    router
        .layer(layers)
        .layer(map_response(payload_too_large_as_json))
}

// RequestBodyLimitLayer and axum's body extractors answer 413 in plain text.
async fn payload_too_large_as_json(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));

    if response.status() != StatusCode::PAYLOAD_TOO_LARGE || is_json {
        return response;
    }

    let mut replaced = AppError::PayloadTooLarge.into_response();
    if let Some(id) = response.headers().get(REQUEST_ID_HEADER) {
        replaced.headers_mut().insert(REQUEST_ID_HEADER, id.clone());
    }
    replaced
}

async fn handle_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("request timed out");
        AppError::Timeout.into_response()
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        AppError::Internal.into_response()
    }
}
