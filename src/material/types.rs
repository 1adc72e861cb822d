// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Material classification types shared by the classifier, formatter and API

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single object found by the detector
///
/// Field names follow the detector's wire naming (`class`, `confidence`, `bbox`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Class label as reported by the model (free-form)
    #[serde(rename = "class")]
    pub class_label: String,
    /// Confidence score (0.0-1.0)
    pub confidence: f64,
    /// Bounding box `[x1, y1, x2, y2]` in source image pixels
    #[serde(rename = "bbox")]
    pub bounding_box: [f64; 4],
}

impl RawDetection {
    pub fn new(class_label: impl Into<String>, confidence: f64, bounding_box: [f64; 4]) -> Self {
        Self {
            class_label: class_label.into(),
            confidence,
            bounding_box,
        }
    }
}

/// Coarse physical material of a detected object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Plastic,
    Electronics,
    Paper,
    Metal,
    Glass,
    Organic,
    Textiles,
    Other,
}

impl MaterialCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialCategory::Plastic => "plastic",
            MaterialCategory::Electronics => "electronics",
            MaterialCategory::Paper => "paper",
            MaterialCategory::Metal => "metal",
            MaterialCategory::Glass => "glass",
            MaterialCategory::Organic => "organic",
            MaterialCategory::Textiles => "textiles",
            MaterialCategory::Other => "other",
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-guess material summary for one detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialInfo {
    pub material_type: String,
    /// Listing title (at most 50 characters)
    pub title: String,
    /// Listing description (at most 150 characters)
    pub description: String,
    pub is_recyclable: bool,
    pub suggested_category: MaterialCategory,
    /// Detection confidence rounded to two decimals
    pub confidence: f64,
    /// Display string such as "50g" or "2kg"
    pub estimated_weight: String,
}

/// Response body of `POST /detect`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub success: bool,
    pub detections: Vec<RawDetection>,
    pub material: MaterialInfo,
}
