use std::any::Any;

use axum::http::StatusCode;
use axum::response::Response;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::app::errors;

/// Browsers on any origin may call the API.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin)
}

/// Turn a handler panic into the generic 500 JSON body.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(%detail, "handler panicked");
    errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, errors::SOMETHING_WENT_WRONG)
}
