use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use itemstore_core::{ItemId, ItemStore};

use crate::app::extract::JsonOrForm;
use crate::app::routes::system::endpoint_not_found;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(list_items).post(create_item).fallback(endpoint_not_found),
        )
        .route(
            "/:id",
            get(get_item)
                .put(update_item)
                .delete(delete_item)
                .fallback(endpoint_not_found),
        )
}

/// Path ids that do not parse can never match a stored item.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<ItemId, axum::response::Response> {
    let Path(raw) = path.map_err(errors::path_rejection_to_response)?;
    raw.parse::<ItemId>().map_err(|_| {
        tracing::warn!(raw_id = %raw, "unparseable item id");
        errors::json_error(StatusCode::NOT_FOUND, errors::ITEM_NOT_FOUND)
    })
}

pub async fn list_items(Extension(store): Extension<Arc<ItemStore>>) -> axum::response::Response {
    match store.list() {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error_to_response(e, "Failed to fetch data"),
    }
}

pub async fn get_item(
    Extension(store): Extension<Arc<ItemStore>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let id = match parse_id(path) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match store.get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e, "Failed to fetch item"),
    }
}

pub async fn create_item(
    Extension(store): Extension<Arc<ItemStore>>,
    JsonOrForm(body): JsonOrForm<dto::CreateItemRequest>,
) -> axum::response::Response {
    match store.create(body.into()) {
        Ok(item) => {
            tracing::info!(item_id = %item.id, name = %item.name, "item created");
            (StatusCode::CREATED, Json(item)).into_response()
        }
        Err(e) => errors::store_error_to_response(e, "Failed to create item"),
    }
}

pub async fn update_item(
    Extension(store): Extension<Arc<ItemStore>>,
    path: Result<Path<String>, PathRejection>,
    JsonOrForm(body): JsonOrForm<dto::UpdateItemRequest>,
) -> axum::response::Response {
    let id = match parse_id(path) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match store.update(id, body.into()) {
        Ok(item) => {
            tracing::info!(item_id = %item.id, "item updated");
            (StatusCode::OK, Json(item)).into_response()
        }
        Err(e) => errors::store_error_to_response(e, "Failed to update item"),
    }
}

pub async fn delete_item(
    Extension(store): Extension<Arc<ItemStore>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let id = match parse_id(path) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match store.delete(id) {
        Ok(deleted_item) => {
            tracing::info!(item_id = %deleted_item.id, "item deleted");
            (
                StatusCode::OK,
                Json(dto::DeleteResponse {
                    message: "Item deleted successfully",
                    deleted_item,
                }),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e, "Failed to delete item"),
    }
}
