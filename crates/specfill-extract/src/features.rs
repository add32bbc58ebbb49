//! Secondary pass that mines bullet lists or "featuring / includes / comes with"
//! phrases when the pattern catalog found too little.

use once_cell::sync::Lazy;
use regex::Regex;
use specfill_core::labels;

use crate::validate::is_valid_value;

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[•●○▪▫]\s*([^•●○▪▫\n]{10,80})").unwrap());

static KEYWORD_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)featuring:?\s+([^.]{15,80})\.").unwrap(), labels::FEATURE),
        (Regex::new(r"(?i)includes:?\s+([^.]{15,80})\.").unwrap(), labels::INCLUDED),
        (Regex::new(r"(?i)comes with:?\s+([^.]{15,80})\.").unwrap(), labels::INCLUDED),
    ]
});

/// Extract up to `max_features` labeled feature phrases from normalized text.
///
/// Bullet segments are preferred; keyword phrases are only consulted when no
/// bullet produced a usable feature.
pub fn extract_key_features(
    text: &str,
    max_features: usize,
    max_value_length: usize,
) -> Vec<(&'static str, String)> {
    let mut features = Vec::new();

    for caps in BULLET_RE.captures_iter(text).take(max_features) {
        let Some(segment) = caps.get(1) else { continue };
        let feature = segment
            .as_str()
            .trim()
            .trim_end_matches(|c| c == '.' || c == ',');
        if within(feature, 10, 80) && is_valid_value(feature, max_value_length) {
            features.push((labels::FEATURE, feature.to_string()));
        }
    }

    if !features.is_empty() {
        return features;
    }

    for (pattern, label) in KEYWORD_PATTERNS.iter() {
        let remaining = max_features.saturating_sub(features.len());
        for caps in pattern.captures_iter(text).take(remaining) {
            let Some(clause) = caps.get(1) else { continue };
            let feature = clause.as_str().trim().trim_end_matches(',');
            if within(feature, 15, 80) && is_valid_value(feature, max_value_length) {
                features.push((*label, feature.to_string()));
            }
        }
    }

    features
}

/// Character length strictly between `min` and `max`.
fn within(s: &str, min: usize, max: usize) -> bool {
    let len = s.chars().count();
    len > min && len < max
}
