// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision model manager for loading the object detector

use std::sync::Arc;

use crate::vision::detection::{ObjectDetector, YoloDetectionModel, YoloParams};

/// Configuration for loading vision models
#[derive(Debug, Clone)]
pub struct VisionModelConfig {
    /// Path to the YOLO ONNX export (optional)
    pub detection_model_path: Option<String>,
    /// Inference parameters for the detector
    pub detection_params: YoloParams,
}

impl Default for VisionModelConfig {
    fn default() -> Self {
        Self {
            detection_model_path: Some("./models/yolov5su.onnx".to_string()),
            detection_params: YoloParams::default(),
        }
    }
}

/// Holds the object detector shared by all request handlers
///
/// A missing or broken model file is not fatal: the manager is created
/// without a detector and `/detect` answers 503.
pub struct VisionModelManager {
    detector: Option<Arc<dyn ObjectDetector>>,
}

impl VisionModelManager {
    /// Create a new VisionModelManager with the given configuration
    pub async fn new(config: VisionModelConfig) -> anyhow::Result<Self> {
        let detector: Option<Arc<dyn ObjectDetector>> =
            if let Some(ref path) = config.detection_model_path {
                match YoloDetectionModel::new(path, config.detection_params.clone()).await {
                    Ok(model) => {
                        tracing::info!("✅ Detection model loaded from {}", path);
                        Some(Arc::new(model))
                    }
                    Err(e) => {
                        tracing::warn!(
                            "⚠️ Failed to load detection model from {}: {}",
                            path,
                            e
                        );
                        None
                    }
                }
            } else {
                None
            };

        Ok(Self { detector })
    }

    /// Wrap an already constructed detector
    pub fn with_detector(detector: Arc<dyn ObjectDetector>) -> Self {
        Self {
            detector: Some(detector),
        }
    }

    /// Manager with no detector loaded
    pub fn empty() -> Self {
        Self { detector: None }
    }

    /// Get the detector if available
    pub fn get_detector(&self) -> Option<Arc<dyn ObjectDetector>> {
        self.detector.clone()
    }

    pub fn has_detector(&self) -> bool {
        self.detector.is_some()
    }

    /// Name of the loaded detector, if any
    pub fn detector_name(&self) -> Option<String> {
        self.detector.as_ref().map(|d| d.model_name().to_string())
    }
}
