// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod material;
pub mod version;
pub mod vision;

pub use api::{ApiConfig, AppState};
pub use material::{
    classify, format_detection_response, DetectionResponse, MaterialInfo, RawDetection,
};
pub use vision::{ObjectDetector, VisionModelManager};
