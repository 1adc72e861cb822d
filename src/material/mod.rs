// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Material classification for recycling listings
//!
//! Turns the detector's `(class, confidence, bbox)` list into a single
//! best-guess material summary:
//! - `tables` - static category, recyclability and weight lookups
//! - `classifier` - one detection to [`MaterialInfo`]
//! - `formatter` - detection list to [`DetectionResponse`]

pub mod classifier;
pub mod formatter;
pub mod tables;
pub mod types;

pub use classifier::classify;
pub use formatter::{best_detection, format_detection_response, unknown_material};
pub use types::{DetectionResponse, MaterialCategory, MaterialInfo, RawDetection};
