// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Router tests
//!
//! Drives the full axum router with `oneshot` to check routing, JSON
//! bodies, error shape and CORS.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use ecobloom_detect_node::api::{create_router, ApiConfig, AppState};
use ecobloom_detect_node::material::RawDetection;
use ecobloom_detect_node::vision::{DetectionError, ObjectDetector, VisionModelManager};
use image::DynamicImage;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

struct LaptopDetector;

impl ObjectDetector for LaptopDetector {
    fn detect(&self, image: &DynamicImage) -> Result<Vec<RawDetection>, DetectionError> {
        Ok(vec![RawDetection::new(
            "laptop",
            0.876,
            [0.0, 0.0, image.width() as f64, image.height() as f64],
        )])
    }

    fn model_name(&self) -> &str {
        "yolov5su"
    }
}

fn router_with_model() -> Router {
    let state = AppState::new(Arc::new(VisionModelManager::with_detector(Arc::new(
        LaptopDetector,
    ))));
    create_router(state, &ApiConfig::default())
}

fn router_without_model() -> Router {
    create_router(AppState::new_for_test(), &ApiConfig::default())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn detect_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/detect")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(router_with_model(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Eco-Bloom AI Detection API");
    assert_eq!(body["status"], "running");
    assert_eq!(body["model"], "yolov5su");
}

#[tokio::test]
async fn test_health_reports_model_state() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(router_with_model(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "model_loaded": true}));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (_, body) = send(router_without_model(), request).await;
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn test_detect_success_body() {
    let (status, body) = send(
        router_with_model(),
        detect_request(json!({ "image": TINY_PNG_BASE64 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["detections"][0]["class"], "laptop");
    assert_eq!(body["detections"][0]["bbox"], json!([0.0, 0.0, 1.0, 1.0]));
    assert_eq!(body["material"]["materialType"], "Laptop");
    assert_eq!(body["material"]["suggestedCategory"], "electronics");
    assert_eq!(body["material"]["estimatedWeight"], "2kg");
    assert_eq!(body["material"]["confidence"], 0.88);
}

#[tokio::test]
async fn test_detect_error_body_has_detail() {
    let (status, body) = send(
        router_with_model(),
        detect_request(json!({ "image": "%%%" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Invalid image data: "));
}

#[tokio::test]
async fn test_detect_missing_image_field() {
    let (status, body) = send(router_with_model(), detect_request(json!({}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_detect_wrong_field_type_has_detail() {
    let (status, body) = send(router_with_model(), detect_request(json!({ "image": 5 }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("image"));
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_detect_invalid_json_has_detail() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/detect")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"image\": "))
        .unwrap();
    let (status, body) = send(router_with_model(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_detect_without_content_type_has_detail() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/detect")
        .body(Body::from(json!({ "image": TINY_PNG_BASE64 }).to_string()))
        .unwrap();
    let (status, body) = send(router_with_model(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Validation error for body: "));
}

#[tokio::test]
async fn test_detect_without_model_is_503() {
    let (status, _) = send(
        router_without_model(),
        detect_request(json!({ "image": TINY_PNG_BASE64 })),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_detect_rejects_get() {
    let request = Request::builder().uri("/detect").body(Body::empty()).unwrap();
    let response = router_with_model().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = router_with_model().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = router_with_model().oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
