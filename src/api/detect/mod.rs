// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection API endpoint module
//!
//! Provides POST /detect for material detection in photos.

pub mod handler;
pub mod request;

pub use handler::detect_handler;
pub use request::DetectRequest;
