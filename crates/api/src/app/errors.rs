use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use itemstore_core::StoreError;

pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong!";

/// Map a store outcome to a response.
///
/// `internal_message` is the operation-specific text shown for internal faults
/// (e.g. "Failed to create item"); the underlying cause is only logged.
pub fn store_error_to_response(
    err: StoreError,
    internal_message: &'static str,
) -> axum::response::Response {
    match err {
        StoreError::Validation(msg) => {
            tracing::warn!(reason = %msg, "rejected invalid input");
            json_error(StatusCode::BAD_REQUEST, msg)
        }
        StoreError::NotFound(id) => {
            tracing::warn!(item_id = %id, "item not found");
            json_error(StatusCode::NOT_FOUND, ITEM_NOT_FOUND)
        }
        StoreError::Internal(cause) => {
            tracing::error!(%cause, "{internal_message}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, internal_message)
        }
    }
}

/// Malformed request bodies keep axum's status but get a JSON body.
pub fn body_rejection_to_response(status: StatusCode, detail: String) -> axum::response::Response {
    tracing::warn!(%status, %detail, "rejected request body");
    (
        status,
        axum::Json(json!({
            "error": "Invalid request body",
            "message": detail,
        })),
    )
        .into_response()
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    body_rejection_to_response(rejection.status(), rejection.body_text())
}

pub fn form_rejection_to_response(rejection: FormRejection) -> axum::response::Response {
    body_rejection_to_response(rejection.status(), rejection.body_text())
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    let detail = rejection.body_text();
    tracing::warn!(%detail, "rejected query string");
    (
        rejection.status(),
        axum::Json(json!({
            "error": "Invalid query string",
            "message": detail,
        })),
    )
        .into_response()
}

/// Any path that does not yield an item id is treated as an unknown item.
pub fn path_rejection_to_response(rejection: PathRejection) -> axum::response::Response {
    tracing::warn!(detail = %rejection.body_text(), "rejected item path");
    json_error(StatusCode::NOT_FOUND, ITEM_NOT_FOUND)
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
