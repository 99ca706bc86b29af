use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::Path;
use tower::ServiceExt;
use wordfreq_analyzer::server::app;

async fn post_analyze(body: Body, content_type: Option<&str>) -> (StatusCode, Value) {
    let app = app(Path::new("static"));

    let mut builder = Request::builder().method("POST").uri("/api/analyze");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(body).expect("request should build");

    let response = app.oneshot(request).await.expect("request should complete");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let value: Value = serde_json::from_slice(&bytes).expect("response should be JSON");

    (status, value)
}

#[tokio::test]
async fn test_analyze_returns_report() {
    let body = Body::from(json!({"text": "cat, dog! cat?"}).to_string());
    let (status, value) = post_analyze(body, Some("application/json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["unique"], json!(["dog"]));
    assert_eq!(value["repeated"], json!([["cat", 2]]));
    assert_eq!(value["counts"]["cat"], json!(2));
    assert_eq!(value["totalWords"], json!(3));
    assert_eq!(value["uniqueWordCount"], json!(1));
    assert_eq!(value["repeatedWordCount"], json!(1));
}

#[tokio::test]
async fn test_analyze_empty_text_is_zero_result() {
    let body = Body::from(json!({"text": "   "}).to_string());
    let (status, value) = post_analyze(body, Some("application/json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["unique"], json!([]));
    assert_eq!(value["repeated"], json!([]));
    assert_eq!(value["counts"], json!({}));
    assert_eq!(value["totalWords"], json!(0));
}

#[tokio::test]
async fn test_analyze_missing_text_field_is_zero_result() {
    let body = Body::from(json!({}).to_string());
    let (status, value) = post_analyze(body, Some("application/json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["totalWords"], json!(0));
}

#[tokio::test]
async fn test_analyze_malformed_json_is_bad_request() {
    let body = Body::from("this is not json");
    let (status, value) = post_analyze(body, Some("application/json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], json!("No JSON data provided"));
}

#[tokio::test]
async fn test_analyze_missing_body_is_bad_request() {
    let (status, value) = post_analyze(Body::empty(), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], json!("No JSON data provided"));
}
