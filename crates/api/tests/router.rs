use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use itemstore_core::ItemStore;
use tower::ServiceExt;

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn handler_panic_becomes_generic_500() {
    async fn boom() -> &'static str {
        panic!("store exploded")
    }

    let app = itemstore_api::app::with_service_layers(Router::new().route("/boom", get(boom)));

    let res = app
        .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(res).await;
    assert_eq!(body["error"], "Something went wrong!");
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = itemstore_api::app::build_app(Arc::new(ItemStore::sample()));

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/data")
                .header("origin", "http://localhost:8000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn put_without_json_content_type_is_client_error() {
    let app = itemstore_api::app::build_app(Arc::new(ItemStore::sample()));

    let res = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/data/1")
                .body(Body::from("value=3"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(res.status().is_client_error());
    let body = body_json(res).await;
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn store_is_isolated_per_app() {
    let store = Arc::new(ItemStore::new());
    let app = itemstore_api::app::build_app(store.clone());

    let res = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/data")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"N","description":"D","value":7.5}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(store.len().unwrap(), 1);
    assert_eq!(ItemStore::new().len().unwrap(), 0);
}

async fn send(app: Router, method: &str, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn unrouted_methods_get_endpoint_not_found() {
    let app = itemstore_api::app::build_app(Arc::new(ItemStore::sample()));

    for (method, uri) in [
        ("PATCH", "/api/data"),
        ("POST", "/api/data/1"),
        ("DELETE", "/api/stats"),
    ] {
        let res = send(app.clone(), method, uri).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        let body = body_json(res).await;
        assert_eq!(body["error"], "Endpoint not found");
    }
}

#[tokio::test]
async fn undecodable_path_id_is_item_not_found() {
    let app = itemstore_api::app::build_app(Arc::new(ItemStore::sample()));

    for method in ["GET", "DELETE"] {
        let res = send(app.clone(), method, "/api/data/%FF").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = body_json(res).await;
        assert_eq!(body["error"], "Item not found");
    }
}

#[tokio::test]
async fn malformed_search_query_is_json_error() {
    let app = itemstore_api::app::build_app(Arc::new(ItemStore::sample()));

    let res = send(app, "GET", "/api/search?query=a&query=b").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body["error"], "Invalid query string");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn bodyless_create_reports_missing_fields() {
    let store = Arc::new(ItemStore::sample());
    let app = itemstore_api::app::build_app(store.clone());

    let res = send(app, "POST", "/api/data").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body["error"], "Name and description are required");
    assert_eq!(store.len().unwrap(), 4);
}
