//! Request body extraction shared by the item write endpoints.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::Response,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::app::errors;

const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Body decoded from JSON or `application/x-www-form-urlencoded`.
///
/// An empty body decodes as `{}`, so required-field checks report the
/// missing fields instead of a content-type error.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

enum BodyKind {
    Json,
    Form,
    Unsupported,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let mime = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase());

    match mime.as_deref() {
        Some("application/json") => BodyKind::Json,
        Some(m) if m.starts_with("application/") && m.ends_with("+json") => BodyKind::Json,
        Some("application/x-www-form-urlencoded") => BodyKind::Form,
        _ => BodyKind::Unsupported,
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let kind = body_kind(&parts.headers);

        let bytes = axum::body::to_bytes(body, BODY_LIMIT).await.map_err(|e| {
            errors::body_rejection_to_response(StatusCode::BAD_REQUEST, e.to_string())
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Json::<T>::from_bytes(b"{}")
                .map(|Json(value)| Self(value))
                .map_err(errors::json_rejection_to_response);
        }

        match kind {
            BodyKind::Json => Json::<T>::from_bytes(&bytes)
                .map(|Json(value)| Self(value))
                .map_err(errors::json_rejection_to_response),
            BodyKind::Form => {
                let req = Request::from_parts(parts, Body::from(bytes));
                Form::<T>::from_request(req, state)
                    .await
                    .map(|Form(value)| Self(value))
                    .map_err(errors::form_rejection_to_response)
            }
            BodyKind::Unsupported => Err(errors::body_rejection_to_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected `Content-Type: application/json` or `application/x-www-form-urlencoded`"
                    .to_string(),
            )),
        }
    }
}
