// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use ecobloom_detect_node::{
    api::{start_server, AppState},
    config::NodeArgs,
    version,
    vision::VisionModelManager,
};
use std::{env, sync::Arc};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = NodeArgs::parse();
    args.validate()?;

    info!("🚀 Starting {}", version::get_version_string());

    info!("📦 Loading detection model from {}", args.model_path);
    let manager = VisionModelManager::new(args.vision_config()).await?;
    if manager.has_detector() {
        info!("✅ Model loaded successfully!");
    } else {
        warn!("⚠️  No detection model available, POST /detect will return 503");
    }

    let api_config = args.api_config();
    info!("📍 Server will run on: http://{}", api_config.listen_addr);

    let state = AppState::new(Arc::new(manager));
    start_server(api_config, state).await
}
