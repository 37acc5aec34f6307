use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use itemstore_core::ItemStore;

use crate::app::{dto, errors};

pub async fn search(
    Extension(store): Extension<Arc<ItemStore>>,
    params: Result<Query<dto::SearchParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    match store.search(params.query.as_deref()) {
        Ok(items) => {
            tracing::debug!(query = ?params.query, hits = items.len(), "search");
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e, "Search failed"),
    }
}

pub async fn stats(Extension(store): Extension<Arc<ItemStore>>) -> axum::response::Response {
    match store.stats(Utc::now()) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => errors::store_error_to_response(e, "Failed to get statistics"),
    }
}
