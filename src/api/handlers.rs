// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::http_server::AppState;

pub const SERVICE_NAME: &str = "Eco-Bloom AI Detection API";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

/// GET / - Service banner
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: SERVICE_NAME.to_string(),
        status: "running".to_string(),
        model: state
            .vision_model_manager
            .detector_name()
            .unwrap_or_else(|| "unavailable".to_string()),
    })
}

/// GET /health - Liveness and model availability
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.vision_model_manager.has_detector(),
    })
}
