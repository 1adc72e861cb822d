// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::detect::{detect_handler, request::MAX_PAYLOAD_SIZE};
use super::handlers::{health_handler, root_handler};
use crate::vision::VisionModelManager;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub listen_addr: String,
    /// Browser origins allowed by CORS; `*` allows any origin without credentials
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            cors_allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:8080".to_string(),
            ],
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub vision_model_manager: Arc<VisionModelManager>,
}

impl AppState {
    pub fn new(vision_model_manager: Arc<VisionModelManager>) -> Self {
        Self {
            vision_model_manager,
        }
    }

    /// State without any detector loaded
    pub fn new_for_test() -> Self {
        Self::new(Arc::new(VisionModelManager::empty()))
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(AllowMethods::any())
            .allow_headers(AllowHeaders::any());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_router(state: AppState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/detect", post(detect_handler))
        .layer(DefaultBodyLimit::max(MAX_PAYLOAD_SIZE + 4096))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: ApiConfig, state: AppState) -> Result<()> {
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .context(format!("Invalid listen address: {}", config.listen_addr))?;
    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("⏹️  Shutting down...");
}
