use axum::{routing::get, Router};

pub mod items;
pub mod queries;
pub mod system;

use system::endpoint_not_found;

/// Router for every endpoint; the store is supplied as an `Extension` layer.
///
/// Known paths hit with an unrouted method get the same JSON 404 as unknown
/// paths.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::health).fallback(endpoint_not_found))
        .nest("/api", api_router())
}

fn api_router() -> Router {
    Router::new()
        .nest("/data", items::router())
        .route("/search", get(queries::search).fallback(endpoint_not_found))
        .route("/stats", get(queries::stats).fallback(endpoint_not_found))
}
