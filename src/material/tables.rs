// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Static lookup tables for COCO class labels
//!
//! Keys are lower-case labels. Recyclability is tracked per label, not per
//! category: a category may hold both recyclable and non-recyclable items.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use super::types::MaterialCategory;

/// Weight shown when a label has no estimate
pub const DEFAULT_WEIGHT: &str = "100g";

const CATEGORY_ENTRIES: &[(&str, MaterialCategory)] = &[
    ("bottle", MaterialCategory::Plastic),
    ("cup", MaterialCategory::Plastic),
    ("bowl", MaterialCategory::Plastic),
    ("cell phone", MaterialCategory::Electronics),
    ("laptop", MaterialCategory::Electronics),
    ("keyboard", MaterialCategory::Electronics),
    ("mouse", MaterialCategory::Electronics),
    ("remote", MaterialCategory::Electronics),
    ("tv", MaterialCategory::Electronics),
    ("book", MaterialCategory::Paper),
    ("scissors", MaterialCategory::Metal),
    ("spoon", MaterialCategory::Metal),
    ("fork", MaterialCategory::Metal),
    ("knife", MaterialCategory::Metal),
    ("toothbrush", MaterialCategory::Plastic),
    ("hair drier", MaterialCategory::Electronics),
    ("clock", MaterialCategory::Electronics),
    ("vase", MaterialCategory::Glass),
    ("wine glass", MaterialCategory::Glass),
    ("potted plant", MaterialCategory::Organic),
    ("chair", MaterialCategory::Textiles),
    ("couch", MaterialCategory::Textiles),
    ("bed", MaterialCategory::Textiles),
    ("backpack", MaterialCategory::Textiles),
    ("handbag", MaterialCategory::Textiles),
    ("tie", MaterialCategory::Textiles),
    ("suitcase", MaterialCategory::Textiles),
    ("banana", MaterialCategory::Organic),
    ("apple", MaterialCategory::Organic),
    ("orange", MaterialCategory::Organic),
    ("broccoli", MaterialCategory::Organic),
    ("carrot", MaterialCategory::Organic),
    ("pizza", MaterialCategory::Organic),
    ("donut", MaterialCategory::Organic),
    ("cake", MaterialCategory::Organic),
];

const RECYCLABLE_ENTRIES: &[&str] = &[
    "bottle",
    "cup",
    "bowl",
    "book",
    "cell phone",
    "laptop",
    "keyboard",
    "mouse",
    "scissors",
    "spoon",
    "fork",
    "knife",
    "vase",
    "wine glass",
    "backpack",
    "handbag",
    "suitcase",
    "tv",
    "remote",
];

const WEIGHT_ENTRIES: &[(&str, &str)] = &[
    ("bottle", "50g"),
    ("cup", "30g"),
    ("bowl", "200g"),
    ("cell phone", "150g"),
    ("laptop", "2kg"),
    ("keyboard", "800g"),
    ("mouse", "100g"),
    ("remote", "120g"),
    ("book", "500g"),
    ("scissors", "100g"),
    ("spoon", "50g"),
    ("fork", "40g"),
    ("knife", "80g"),
    ("vase", "300g"),
    ("wine glass", "150g"),
    ("backpack", "800g"),
    ("handbag", "500g"),
    ("suitcase", "3kg"),
    ("clock", "200g"),
    ("banana", "120g"),
    ("apple", "150g"),
    ("orange", "130g"),
    ("tv", "10kg"),
    ("hair drier", "600g"),
    ("toothbrush", "20g"),
];

fn categories() -> &'static HashMap<&'static str, MaterialCategory> {
    static TABLE: OnceLock<HashMap<&'static str, MaterialCategory>> = OnceLock::new();
    TABLE.get_or_init(|| CATEGORY_ENTRIES.iter().copied().collect())
}

fn recyclables() -> &'static HashSet<&'static str> {
    static TABLE: OnceLock<HashSet<&'static str>> = OnceLock::new();
    TABLE.get_or_init(|| RECYCLABLE_ENTRIES.iter().copied().collect())
}

fn weights() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| WEIGHT_ENTRIES.iter().copied().collect())
}

/// Category for a lower-case label, `Other` when unmapped
pub fn category_for(label: &str) -> MaterialCategory {
    categories()
        .get(label)
        .copied()
        .unwrap_or(MaterialCategory::Other)
}

/// Exact membership of a lower-case label in the recyclable set
pub fn is_recyclable(label: &str) -> bool {
    recyclables().contains(label)
}

/// Weight estimate for a lower-case label, [`DEFAULT_WEIGHT`] when unmapped
pub fn weight_for(label: &str) -> &'static str {
    weights().get(label).copied().unwrap_or(DEFAULT_WEIGHT)
}
