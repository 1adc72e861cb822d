// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Eco-Bloom detection node

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-material-detection-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "yolo-onnx-detection",
    "material-classification",
    "data-url-images",
    "cors",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Eco-Bloom Detection Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
