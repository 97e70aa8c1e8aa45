//! HTTP-level tests for the REST router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use urlencoding::encode;

use bgdict::{create_rest_router, RestApiConfig, WordResolver};

use crate::common::{failing_resolver, sample_resolver, FailingStore};

fn app(resolver: WordResolver) -> Router {
    create_rest_router(Arc::new(resolver), &RestApiConfig::default())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_search_endpoint() {
    let app = app(sample_resolver());

    let (status, json) = get(&app, &format!("/search?query={}", encode("градове"))).await;
    assert_eq!(status, StatusCode::OK);
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["baseWord"]["id"], 100);
    assert_eq!(results[0]["derivative"]["id"], 1000);
    assert_eq!(results[0]["derivative"]["word"]["id"], 100);
    assert_eq!(results[0]["baseWord"]["wordType"]["SpeechPart"], "noun");

    let (status, json) = get(&app, &format!("/search?query={}", encode("липсва"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(vec![]));
}

#[tokio::test]
async fn test_missing_query_is_bad_request() {
    let app = app(sample_resolver());

    for uri in ["/search", "/search?query=", "/find", "/find?query="] {
        let (status, json) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(json["code"], "missing_query");
    }

    // Only a missing or empty value is rejected; blanks are looked up as given.
    let (status, json) = get(&app, &format!("/search?query={}", encode(" "))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(vec![]));
}

#[tokio::test]
async fn test_find_endpoint_lists_every_form() {
    let app = app(sample_resolver());

    let (status, json) = get(&app, &format!("/find?query={}", encode("градът"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_id_endpoint() {
    let app = app(sample_resolver());

    let (status, json) = get(&app, "/id?id=103").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "пиша");
    assert_eq!(json["translation"]["content"], "to write");

    let (status, json) = get(&app, "/id?id=9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "not_found");

    for uri in ["/id", "/id?id=abc"] {
        let (status, json) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(json["code"], "missing_id");
    }
}

#[tokio::test]
async fn test_derived_endpoint() {
    let app = app(sample_resolver());

    let (status, json) = get(&app, "/derived?id=100").await;
    assert_eq!(status, StatusCode::OK);
    let forms = json.as_array().unwrap();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0]["baseWordId"], 100);

    let (status, _) = get(&app, "/derived?id=9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bulk_endpoint() {
    let app = app(sample_resolver());

    let (status, json) = post(&app, "/bulk", r#"{"queries": ["ябълки", "няма", "град"]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"].as_array().unwrap().len(), 3);

    let (status, json) = post(&app, "/bulk", r#"{"queries": "ябълки"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_body");
}

#[tokio::test]
async fn test_bulk_endpoint_skips_failures() {
    let app = app(failing_resolver(FailingStore::on_query("град")));

    let (status, json) = post(&app, "/bulk", r#"{"queries": ["град", "ябълка"]}"#).await;
    assert_eq!(status, StatusCode::OK);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["baseWord"]["id"], 102);
}

#[tokio::test]
async fn test_bulk_by_id_endpoint() {
    let app = app(sample_resolver());

    let (status, json) = post(&app, "/bulkById", r#"{"queries": [102, 100]}"#).await;
    assert_eq!(status, StatusCode::OK);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["word"]["id"], 102);
    assert_eq!(results[0]["derivativeForms"].as_array().unwrap().len(), 1);

    let (status, json) = post(&app, "/bulkById", r#"{"queries": [102, 9999]}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("results").is_none());
}

#[tokio::test]
async fn test_storage_failures_are_server_errors() {
    let app = app(failing_resolver(FailingStore::on_id(100)));

    let (status, json) = get(&app, "/id?id=100").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "get_failed");

    let (status, json) = post(&app, "/bulkById", r#"{"queries": [102, 100]}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "bulk_by_id_failed");
}

#[tokio::test]
async fn test_prefix_and_health() {
    let app = create_rest_router(
        Arc::new(sample_resolver()),
        &RestApiConfig {
            enable_cors: false,
            prefix: "/api/v1".to_string(),
        },
    );

    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = get(&app, "/api/v1/id?id=102").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, "/id?id=102").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get(&app, "/api/v1/api").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["backend"], "memory");
}
