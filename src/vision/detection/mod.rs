// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Object detection for material classification
//!
//! Components:
//! - `preprocessing` - letterbox resize into the model input tensor
//! - `postprocessing` - output decoding and NMS
//! - `model` - YOLO ONNX model behind the [`ObjectDetector`] trait
//! - `labels` - COCO class names

pub mod labels;
pub mod model;
pub mod postprocessing;
pub mod preprocessing;

use image::DynamicImage;
use thiserror::Error;

use crate::material::RawDetection;

pub use model::{YoloDetectionModel, YoloParams};

#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Detection model not found: {0}")]
    ModelNotFound(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Unexpected model output: {0}")]
    UnexpectedOutput(String),
}

/// Finds objects in a decoded RGB image
///
/// Implementations return detections in source-image pixel coordinates,
/// possibly empty, with confidences in [0, 1].
pub trait ObjectDetector: Send + Sync {
    fn detect(&self, image: &DynamicImage) -> Result<Vec<RawDetection>, DetectionError>;

    /// Name reported by `GET /`
    fn model_name(&self) -> &str;
}
