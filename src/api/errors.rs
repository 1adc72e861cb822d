// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error body, `{"detail": "..."}` as the mobile client expects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
    pub error_type: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    ValidationError { field: String, message: String },
    InvalidImage(String),
    ServiceUnavailable(String),
    DetectionFailed(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let error_type = match self {
            ApiError::ValidationError { .. } => "validation_error",
            ApiError::InvalidImage(_) => "invalid_image",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::DetectionFailed(_) => "detection_failed",
        };

        ErrorResponse {
            detail: self.to_string(),
            error_type: error_type.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::DetectionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError { field, message } => {
                write!(f, "Validation error for {}: {}", field, message)
            }
            ApiError::InvalidImage(msg) => write!(f, "Invalid image data: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            ApiError::DetectionFailed(msg) => write!(f, "Detection failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError {
            field: "body".to_string(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
