//! Per-label value formatters.
//!
//! Each formatter turns the captures of a matched rule into a display value,
//! or `None` when the match cannot produce one.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Signature shared by every formatter in the catalog.
pub type Formatter = fn(&Captures<'_>) -> Option<String>;

static FILLER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:with|and|for|the|a|an)\b.*").unwrap());

/// `A x B x C unit` for three numeric groups, `A x B` for two.
pub fn dimensions(caps: &Captures<'_>) -> Option<String> {
    let numbers: Vec<&str> = caps
        .iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .filter(|g| is_numeric_group(g))
        .collect();

    match numbers.len() {
        0 | 1 => None,
        2 => Some(format!("{} x {}", numbers[0], numbers[1])),
        _ => {
            let unit = match caps.get(4).map(|m| m.as_str()) {
                Some(u) if !u.is_empty() && u != "\"" => u,
                _ => "inches",
            };
            Some(format!(
                "{} x {} x {} {}",
                numbers[0], numbers[1], numbers[2], unit
            ))
        }
    }
}

/// `<number> <unit>` with both taken verbatim from groups 1 and 2.
pub fn amount_with_unit(caps: &Captures<'_>) -> Option<String> {
    let amount = caps.get(1)?.as_str();
    let unit = caps.get(2)?.as_str();
    Some(format!("{} {}", amount, unit))
}

/// Material phrase, trimmed of trailing filler clauses.
pub fn material_phrase(caps: &Captures<'_>) -> Option<String> {
    clean_material(caps.get(1)?.as_str())
}

/// Title-cased group 1.
pub fn title_cased(caps: &Captures<'_>) -> Option<String> {
    Some(title_case(caps.get(1)?.as_str().trim()))
}

/// `N° UNIT`, unit upper-cased and defaulting to `F`.
pub fn temperature(caps: &Captures<'_>) -> Option<String> {
    let degrees = caps.get(1)?.as_str();
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_else(|| "F".to_string());
    Some(format!("{}° {}", degrees, unit))
}

pub fn settings(caps: &Captures<'_>) -> Option<String> {
    Some(format!("{} settings", caps.get(1)?.as_str()))
}

pub fn pieces(caps: &Captures<'_>) -> Option<String> {
    Some(format!("{} pieces", caps.get(1)?.as_str()))
}

/// Lower-case, drop everything from the first filler word, and title-case
/// the remainder if it is between 4 and 29 characters long.
pub fn clean_material(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let cleaned = FILLER_RE.replace(&lowered, "");
    let cleaned = cleaned.trim();
    let len = cleaned.chars().count();
    if len > 3 && len < 30 {
        Some(title_case(cleaned))
    } else {
        None
    }
}

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts at any letter not preceded by another letter, so
/// `"12-piece set"` becomes `"12-Piece Set"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_letter = false;
    for c in text.chars() {
        if prev_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_letter = c.is_alphabetic();
    }
    out
}

fn is_numeric_group(group: &str) -> bool {
    let digits: String = group.chars().filter(|c| *c != '.').collect();
    !digits.is_empty() && digits.chars().all(|c| c.is_numeric())
}
