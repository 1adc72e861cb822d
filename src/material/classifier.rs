// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Maps a single detection onto a [`MaterialInfo`] listing summary

use super::tables::{category_for, is_recyclable, weight_for};
use super::types::{MaterialCategory, MaterialInfo};

/// Maximum title length in characters
pub const MAX_TITLE_CHARS: usize = 50;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_CHARS: usize = 150;

const GOOD_CONDITION_ABOVE: f64 = 0.8;
const FAIR_CONDITION_ABOVE: f64 = 0.6;

/// Classify one detection by its class label and confidence
///
/// Never fails: unknown labels fall back to `other`, not recyclable, and the
/// default weight. Title and description are cut at a character boundary
/// without regard for words.
pub fn classify(class_label: &str, confidence: f64) -> MaterialInfo {
    let label = class_label.to_lowercase();

    let category = category_for(&label);
    let recyclable = is_recyclable(&label);

    let display_name = label
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    let full_title = format!(
        "{} for {}",
        display_name,
        if recyclable { "recycling" } else { "reuse" }
    );
    let material_type = full_title
        .split(" for ")
        .next()
        .unwrap_or_default()
        .to_string();

    let mut description = format!(
        "{} in {} condition. {}.",
        material_type,
        condition_for(confidence),
        if recyclable {
            "Recyclable item"
        } else {
            "Can be reused or repurposed"
        }
    );
    if category != MaterialCategory::Other {
        description.push_str(&format!(" Category: {}.", category));
    }

    MaterialInfo {
        material_type,
        title: truncate_chars(&full_title, MAX_TITLE_CHARS),
        description: truncate_chars(&description, MAX_DESCRIPTION_CHARS),
        is_recyclable: recyclable,
        suggested_category: category,
        confidence: round_to_hundredths(confidence),
        estimated_weight: weight_for(&label).to_string(),
    }
}

/// Condition wording for a confidence score
pub fn condition_for(confidence: f64) -> &'static str {
    if confidence > GOOD_CONDITION_ABOVE {
        "good"
    } else if confidence > FAIR_CONDITION_ABOVE {
        "fair"
    } else {
        "acceptable"
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = titlecase(first);
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

/// Title case of a leading character
///
/// Differs from upper case only for digraphs and a few ligatures.
fn titlecase(c: char) -> String {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ".to_string(),
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ".to_string(),
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ".to_string(),
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ".to_string(),
        'ß' => "Ss".to_string(),
        'ﬀ' => "Ff".to_string(),
        'ﬁ' => "Fi".to_string(),
        'ﬂ' => "Fl".to_string(),
        'ﬃ' => "Ffi".to_string(),
        'ﬄ' => "Ffl".to_string(),
        'ﬅ' | 'ﬆ' => "St".to_string(),
        other => other.to_uppercase().collect(),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Round the stored binary value to two decimals, ties to even
///
/// Scaling by 100 first would round twice and push values such as 0.015
/// (stored just below the half) up to 0.02.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
