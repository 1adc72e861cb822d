// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Command-line and environment configuration

use anyhow::{bail, Result};
use clap::Parser;

use crate::api::ApiConfig;
use crate::vision::{VisionModelConfig, YoloParams};

/// Eco-Bloom detection node
#[derive(Parser, Debug, Clone)]
#[command(name = "ecobloom-detect-node")]
#[command(version)]
#[command(about = "Object detection API for recyclable materials", long_about = None)]
pub struct NodeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// HTTP port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path to the YOLO ONNX export
    #[arg(long, env = "MODEL_PATH", default_value = "./models/yolov5su.onnx")]
    pub model_path: String,

    /// Square model input size in pixels
    #[arg(long, env = "MODEL_INPUT_SIZE", default_value_t = 640)]
    pub input_size: u32,

    /// Minimum detection score (0..1)
    #[arg(long, env = "CONFIDENCE_THRESHOLD", default_value_t = 0.25)]
    pub confidence_threshold: f32,

    /// NMS overlap threshold (0..1)
    #[arg(long, env = "IOU_THRESHOLD", default_value_t = 0.45)]
    pub iou_threshold: f32,

    /// Maximum detections returned per image
    #[arg(long, env = "MAX_DETECTIONS", default_value_t = 300)]
    pub max_detections: usize,

    /// Allowed CORS origins (comma-separated, `*` for any)
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:5173", "http://localhost:8080"]
    )]
    pub cors_origins: Vec<String>,
}

impl NodeArgs {
    /// Reject values the detector cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            bail!(
                "confidence threshold must be within 0..1, got {}",
                self.confidence_threshold
            );
        }
        if !(0.0..=1.0).contains(&self.iou_threshold) {
            bail!("IoU threshold must be within 0..1, got {}", self.iou_threshold);
        }
        if self.input_size == 0 || self.input_size % 32 != 0 {
            bail!(
                "model input size must be a positive multiple of 32, got {}",
                self.input_size
            );
        }
        if self.max_detections == 0 {
            bail!("max detections must be at least 1");
        }
        Ok(())
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            listen_addr: format!("{}:{}", self.host, self.port),
            cors_allowed_origins: self.cors_origins.clone(),
        }
    }

    pub fn vision_config(&self) -> VisionModelConfig {
        VisionModelConfig {
            detection_model_path: Some(self.model_path.clone()),
            detection_params: YoloParams {
                input_size: self.input_size,
                conf_threshold: self.confidence_threshold,
                iou_threshold: self.iou_threshold,
                max_detections: self.max_detections,
            },
        }
    }
}
