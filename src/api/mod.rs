// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod detect;
pub mod errors;
pub mod handlers;
pub mod http_server;

pub use detect::{detect_handler, DetectRequest};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::{HealthResponse, RootResponse};
pub use http_server::{create_router, start_server, ApiConfig, AppState};
