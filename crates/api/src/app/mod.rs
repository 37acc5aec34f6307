//! HTTP API application wiring (Axum router + shared store).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use itemstore_core::ItemStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Build the full HTTP router around `store` (public entrypoint used by `main.rs`).
pub fn build_app(store: Arc<ItemStore>) -> Router {
    with_service_layers(routes::router().layer(Extension(store)))
}

/// Cross-cutting layers: 404 fallback, panic → 500, request tracing, CORS.
pub fn with_service_layers(router: Router) -> Router {
    router.fallback(routes::system::endpoint_not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::cors())
            .layer(CatchPanicLayer::custom(middleware::handle_panic)),
    )
}
