// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Builds the `/detect` response from the raw detection list

use super::classifier::classify;
use super::tables::DEFAULT_WEIGHT;
use super::types::{DetectionResponse, MaterialCategory, MaterialInfo, RawDetection};

/// Material reported when the image contains no detections
pub fn unknown_material() -> MaterialInfo {
    MaterialInfo {
        material_type: "Unknown Material".to_string(),
        title: "Material for recycling".to_string(),
        description: "No specific object detected. Please provide details manually.".to_string(),
        is_recyclable: false,
        suggested_category: MaterialCategory::Other,
        confidence: 0.0,
        estimated_weight: DEFAULT_WEIGHT.to_string(),
    }
}

/// Highest-confidence detection; the first one wins on ties
pub fn best_detection(detections: &[RawDetection]) -> Option<&RawDetection> {
    let mut iter = detections.iter();
    let mut best = iter.next()?;
    for detection in iter {
        if detection.confidence > best.confidence {
            best = detection;
        }
    }
    Some(best)
}

/// Assemble the full response, keeping `detections` in input order
pub fn format_detection_response(detections: Vec<RawDetection>) -> DetectionResponse {
    let material = match best_detection(&detections) {
        Some(best) => classify(&best.class_label, best.confidence),
        None => unknown_material(),
    };

    DetectionResponse {
        success: true,
        detections,
        material,
    }
}
