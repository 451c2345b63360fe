/// API integration tests
/// Tests complete HTTP request/response cycles through the router
mod common;

use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, create_test_app, get, BrokenSource, StubSource};
use serde_json::json;
use soft_server::CatalogSource;
use std::sync::Arc;
use tower::util::ServiceExt;

// ===== Health =====

#[tokio::test]
async fn test_health_reports_version() {
    let app = create_test_app(Arc::new(CatalogSource), 10);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

// ===== Track Search =====

#[tokio::test]
async fn test_search_returns_tracks_in_wire_format() {
    let app = create_test_app(Arc::new(CatalogSource), 10);

    let response = app
        .oneshot(get("/tracks/search?q=sunset"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let tracks = body["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0]["title"], "Sunset Lover");
    assert_eq!(tracks[0]["artist"], "Petit Biscuit");
    assert_eq!(tracks[0]["durationSec"], 197);
    assert!(tracks[0]["coverUrl"].is_string());
    assert!(tracks[0]["previewUrl"].is_string());
    assert!(tracks[0]["url"].is_string());
}

#[tokio::test]
async fn test_search_without_query_returns_empty_object() {
    let stub = StubSource::new(3);
    let app = create_test_app(stub.clone(), 10);

    for uri in ["/tracks/search", "/tracks/search?q=", "/tracks/search?q=%20%20"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }
    assert!(stub.terms.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_term_is_trimmed_and_decoded() {
    let stub = StubSource::new(1);
    let app = create_test_app(stub.clone(), 10);

    let response = app
        .oneshot(get("/tracks/search?q=%20oh%20wonder%20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(*stub.terms.lock().unwrap(), vec!["oh wonder".to_string()]);
}

#[tokio::test]
async fn test_search_is_limited() {
    let app = create_test_app(StubSource::new(25), 10);

    let response = app.oneshot(get("/tracks/search?q=many")).await.unwrap();

    let body = body_json(response).await;
    let tracks = body["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 10);
    assert_eq!(tracks[0]["title"], "many 0");
    assert_eq!(tracks[9]["title"], "many 9");
}

#[tokio::test]
async fn test_search_with_no_match_returns_empty_list() {
    let app = create_test_app(Arc::new(CatalogSource), 10);

    let response = app
        .oneshot(get("/tracks/search?q=zzzzzz"))
        .await
        .unwrap();

    assert_eq!(body_json(response).await, json!({ "tracks": [] }));
}

#[tokio::test]
async fn test_source_failure_is_bad_gateway() {
    let app = create_test_app(Arc::new(BrokenSource), 10);

    let response = app.oneshot(get("/tracks/search?q=drive")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_overlong_query_is_rejected() {
    let app = create_test_app(StubSource::new(1), 10);
    let uri = format!("/tracks/search?q={}", "a".repeat(201));

    let response = app.oneshot(get(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_app(Arc::new(CatalogSource), 10);
    let request = Request::builder()
        .method(Method::GET)
        .uri("/tracks/search?q=drive")
        .header(header::ORIGIN, "http://localhost:4200")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app(Arc::new(CatalogSource), 10);

    let response = app.oneshot(get("/tracks")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
