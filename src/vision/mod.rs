// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing module for CPU-based object detection
//!
//! This module provides:
//! - Image decoding from base64 / data URL payloads
//! - Object detection via a YOLO ONNX export

pub mod detection;
pub mod image_utils;
pub mod model_manager;

pub use detection::{DetectionError, ObjectDetector, YoloDetectionModel, YoloParams};
pub use image_utils::{
    decode_base64_image, decode_image_bytes, detect_format, ImageError, ImageInfo,
};
pub use model_manager::{VisionModelConfig, VisionModelManager};
