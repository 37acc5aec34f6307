use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::app::{dto, errors};

pub const SERVICE_MESSAGE: &str = "Hackathon Project API is running!";

pub async fn health() -> impl IntoResponse {
    Json(dto::HealthResponse {
        message: SERVICE_MESSAGE,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

pub async fn endpoint_not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, errors::ENDPOINT_NOT_FOUND)
}
