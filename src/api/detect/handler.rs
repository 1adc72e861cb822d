// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info, warn};

use super::request::DetectRequest;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::material::{format_detection_response, DetectionResponse};
use crate::vision::decode_base64_image;

/// POST /detect - Detect objects and summarize the most likely material
///
/// # Request
/// - `image`: Base64-encoded image or data URL (required)
///
/// # Response
/// - `success`: Always true for a processed image
/// - `detections`: Every detection as `{class, confidence, bbox}`
/// - `material`: Summary of the highest-confidence detection
///
/// # Errors
/// - 422 Unprocessable Entity: body is not a valid request or `image` missing
/// - 400 Bad Request: image cannot be decoded
/// - 503 Service Unavailable: detection model not loaded
/// - 500 Internal Server Error: inference failed
pub async fn detect_handler(
    State(state): State<AppState>,
    request: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DetectionResponse>, ApiError> {
    info!("📸 Received detection request");

    let Json(request) = request.map_err(|rejection| {
        warn!("Malformed detection request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let payload = request.validate().map_err(|e| {
        warn!("Detection request validation failed: {}", e);
        e
    })?;

    let detector = state.vision_model_manager.get_detector().ok_or_else(|| {
        warn!("Detection model not loaded");
        ApiError::ServiceUnavailable("Detection model not loaded".to_string())
    })?;

    let (image, image_info) = decode_base64_image(payload).map_err(|e| {
        warn!("❌ Image decode error: {}", e);
        ApiError::InvalidImage(e.to_string())
    })?;

    debug!(
        "Image decoded: {}x{}, {} bytes",
        image_info.width, image_info.height, image_info.size_bytes
    );

    let detections = tokio::task::spawn_blocking(move || detector.detect(&image))
        .await
        .map_err(|e| ApiError::DetectionFailed(e.to_string()))?
        .map_err(|e| {
            warn!("❌ Detection error: {}", e);
            ApiError::DetectionFailed(e.to_string())
        })?;

    for detection in &detections {
        debug!(
            "  - Detected: {} ({:.2})",
            detection.class_label, detection.confidence
        );
    }
    info!("✅ Found {} objects", detections.len());

    Ok(Json(format_detection_response(detections)))
}
