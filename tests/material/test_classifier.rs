// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Material classifier tests
//!
//! Verifies that `classify` is total over labels and confidences and that
//! the listing text follows the table lookups.

use ecobloom_detect_node::material::classifier::{MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};
use ecobloom_detect_node::material::tables::{category_for, weight_for, DEFAULT_WEIGHT};
use ecobloom_detect_node::material::{classify, MaterialCategory};

const SAMPLE_LABELS: &[&str] = &[
    "bottle",
    "Cell Phone",
    "HAIR DRIER",
    "potted plant",
    "person",
    "",
    "   ",
    "a label that keeps going well past any reasonable title length for a listing",
    "UNKNOWN_OBJECT",
    "téléphone",
];

const SAMPLE_CONFIDENCES: &[f64] = &[0.0, 0.005, 0.25, 0.6, 0.601, 0.8, 0.805, 0.999, 1.0];

#[test]
fn test_confidence_rounded_to_two_decimals() {
    let cases = [
        (0.0, 0.0),
        (0.005, 0.01),
        (0.015, 0.01),
        (0.125, 0.12),
        (0.245, 0.24),
        (0.305, 0.3),
        (0.601, 0.6),
        (0.876, 0.88),
        (0.999, 1.0),
        (1.0, 1.0),
    ];
    for &label in SAMPLE_LABELS {
        for (confidence, expected) in cases {
            let info = classify(label, confidence);
            assert_eq!(
                info.confidence, expected,
                "label={:?} confidence={}",
                label, confidence
            );
        }
    }
}

#[test]
fn test_rounded_confidence_has_two_decimals() {
    for &confidence in SAMPLE_CONFIDENCES {
        let rounded = classify("cup", confidence).confidence;
        assert_eq!(format!("{:.2}", rounded).parse::<f64>().unwrap(), rounded);
        assert!((rounded - confidence).abs() <= 0.005 + f64::EPSILON);
    }
}

#[test]
fn test_weight_matches_table_or_default() {
    for &label in SAMPLE_LABELS {
        let info = classify(label, 0.5);
        assert_eq!(info.estimated_weight, weight_for(&label.to_lowercase()));
    }
    assert_eq!(classify("person", 0.5).estimated_weight, DEFAULT_WEIGHT);
    assert_eq!(classify("Laptop", 0.5).estimated_weight, "2kg");
}

#[test]
fn test_length_limits_hold() {
    for &label in SAMPLE_LABELS {
        for &confidence in SAMPLE_CONFIDENCES {
            let info = classify(label, confidence);
            assert!(info.title.chars().count() <= MAX_TITLE_CHARS, "{:?}", info.title);
            assert!(
                info.description.chars().count() <= MAX_DESCRIPTION_CHARS,
                "{:?}",
                info.description
            );
        }
    }
}

#[test]
fn test_category_follows_table() {
    for &label in SAMPLE_LABELS {
        let info = classify(label, 0.5);
        assert_eq!(info.suggested_category, category_for(&label.to_lowercase()));
    }
}

#[test]
fn test_unknown_object() {
    let info = classify("UNKNOWN_OBJECT", 0.99);
    assert_eq!(info.suggested_category, MaterialCategory::Other);
    assert!(!info.is_recyclable);
    assert_eq!(info.estimated_weight, "100g");
    assert!(!info.description.contains("Category:"));
    assert_eq!(
        info.description,
        "Unknown_object in good condition. Can be reused or repurposed."
    );
}

#[test]
fn test_condition_wording_in_description() {
    assert!(classify("book", 0.81).description.contains("good condition"));
    assert!(classify("book", 0.8).description.contains("fair condition"));
    assert!(classify("book", 0.61).description.contains("fair condition"));
    assert!(classify("book", 0.6).description.contains("acceptable condition"));
}

#[test]
fn test_recyclability_is_per_label() {
    let toothbrush = classify("toothbrush", 0.9);
    let cup = classify("cup", 0.9);
    assert_eq!(toothbrush.suggested_category, cup.suggested_category);
    assert!(!toothbrush.is_recyclable);
    assert!(cup.is_recyclable);
    assert_eq!(toothbrush.title, "Toothbrush for reuse");
    assert_eq!(cup.title, "Cup for recycling");
}

#[test]
fn test_long_label_title_cut_mid_word() {
    let info = classify(
        "a label that keeps going well past any reasonable title length for a listing",
        0.9,
    );
    assert_eq!(info.title.chars().count(), MAX_TITLE_CHARS);
    assert_eq!(info.title, "A Label That Keeps Going Well Past Any Reasonable ");
    // Capitalization turns the inner "for" into "For", so the material type is the whole label
    assert_eq!(
        info.material_type,
        "A Label That Keeps Going Well Past Any Reasonable Title Length For A Listing"
    );
    assert!(info.description.starts_with(&info.material_type));
}
