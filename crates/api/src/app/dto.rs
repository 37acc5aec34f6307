use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use itemstore_core::{Item, ItemPatch, NewItem};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/data`. Presence of `name`/`description` is checked by
/// the store, not by deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(body: CreateItemRequest) -> Self {
        NewItem {
            name: body.name,
            description: body.description,
            value: body.value,
        }
    }
}

/// Body of `PUT /api/data/:id`. Omitted (or `null`) fields keep their value.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub value: Option<f64>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(body: UpdateItemRequest) -> Self {
        ItemPatch {
            name: body.name,
            description: body.description,
            value: body.value,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted_item: Item,
}
