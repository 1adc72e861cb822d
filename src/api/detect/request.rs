// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::vision::image_utils::MAX_IMAGE_SIZE;

/// Largest accepted payload: base64 of a maximum-size image plus a data URL header
pub const MAX_PAYLOAD_SIZE: usize = MAX_IMAGE_SIZE / 3 * 4 + 1024;

/// Request for object detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Base64-encoded image, optionally as a `data:image/...;base64,` URL
    #[serde(default)]
    pub image: Option<String>,
}

impl DetectRequest {
    /// Validate the request and return the image payload
    pub fn validate(&self) -> Result<&str, ApiError> {
        let image = self.image.as_deref().ok_or_else(|| ApiError::ValidationError {
            field: "image".to_string(),
            message: "image is required".to_string(),
        })?;

        if image.len() > MAX_PAYLOAD_SIZE {
            return Err(ApiError::InvalidImage(format!(
                "payload exceeds maximum size of {} bytes",
                MAX_PAYLOAD_SIZE
            )));
        }

        Ok(image)
    }
}
