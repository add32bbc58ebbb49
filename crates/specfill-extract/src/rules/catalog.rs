//! The ordered pattern catalog, compiled once per process.
//!
//! Every pattern is matched case-insensitively against lower-cased text.
//! Label order here is the order the engine visits labels in, which also
//! decides what survives a cap.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use specfill_core::labels;

use super::formatters::{self, Formatter};

/// One extraction rule: a pattern, an optional trailing-context guard, and a formatter.
pub struct PatternRule {
    regex: Regex,
    /// A candidate is discarded when the text right after it matches this
    /// (anchored) pattern. Stands in for a negative lookahead.
    reject_followed_by: Option<Regex>,
    format: Formatter,
}

impl PatternRule {
    fn new(pattern: &str, format: Formatter) -> Self {
        Self {
            regex: Regex::new(&format!("(?i){}", pattern)).unwrap(),
            reject_followed_by: None,
            format,
        }
    }

    fn unless_followed_by(mut self, pattern: &str) -> Self {
        self.reject_followed_by = Some(Regex::new(&format!(r"(?i)^(?:{})", pattern)).unwrap());
        self
    }

    /// Leftmost match that is not rejected by the trailing-context guard.
    pub fn find<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        let mut start = 0;
        while start <= text.len() {
            let caps = self.regex.captures_at(text, start)?;
            let whole = caps.get(0)?;
            match &self.reject_followed_by {
                Some(guard) if guard.is_match(&text[whole.end()..]) => {
                    start = text[whole.start()..]
                        .chars()
                        .next()
                        .map_or(text.len() + 1, |c| whole.start() + c.len_utf8());
                }
                _ => return Some(caps),
            }
        }
        None
    }

    /// Match and format. `None` when the rule does not match or cannot format.
    pub fn apply(&self, text: &str) -> Option<String> {
        let caps = self.find(text)?;
        (self.format)(&caps).filter(|v| !v.is_empty())
    }
}

/// A label and its ordered rules.
pub struct LabelRules {
    pub label: &'static str,
    pub rules: Vec<PatternRule>,
}

pub static CATALOG: Lazy<Vec<LabelRules>> = Lazy::new(build_catalog);

fn build_catalog() -> Vec<LabelRules> {
    vec![
        LabelRules {
            label: labels::DIMENSIONS,
            rules: vec![
                PatternRule::new(
                    r#"(\d+\.?\d*)\s*["']?\s*[x×]\s*(\d+\.?\d*)\s*["']?\s*[x×]\s*(\d+\.?\d*)\s*["']?\s*(inches?|in|cm|mm|")?"#,
                    formatters::dimensions,
                ),
                PatternRule::new(
                    r"(?:dimensions?|size):?\s*(\d+\.?\d*)\s*[x×]\s*(\d+\.?\d*)\s*(?:[x×]\s*(\d+\.?\d*))?",
                    formatters::dimensions,
                ),
                PatternRule::new(
                    r#"(\d+\.?\d*)\s*["']?\s*[x×]\s*(\d+\.?\d*)"#,
                    formatters::dimensions,
                ),
            ],
        },
        LabelRules {
            label: labels::WEIGHT,
            rules: vec![PatternRule::new(
                r"(\d+\.?\d*)\s*(lbs?|pounds?|kg|kilograms?)\b",
                formatters::amount_with_unit,
            )],
        },
        LabelRules {
            label: labels::CAPACITY,
            rules: vec![
                PatternRule::new(
                    r"(?:capacity:?\s*)?(\d+\.?\d*)\s*(?:-\s*)?(cup|cups|oz|ounces?|ml|milliliters?|liter|liters?|l|gallon|gallons?|qt|quarts?)\b",
                    formatters::amount_with_unit,
                ),
                PatternRule::new(r"(?:up to|upto)\s+(\d+)\s+(cup|cups)\b", formatters::amount_with_unit),
            ],
        },
        LabelRules {
            label: labels::POWER,
            rules: vec![PatternRule::new(r"(\d+)\s*(watt|watts|w)\b", formatters::amount_with_unit)
                .unless_followed_by(r"\s*max")],
        },
        LabelRules {
            label: labels::VOLTAGE,
            rules: vec![PatternRule::new(r"(\d+)\s*(volt|volts|v)\b", formatters::amount_with_unit)],
        },
        LabelRules {
            label: labels::MATERIAL,
            rules: vec![
                PatternRule::new(
                    r"(?:made (?:of|from)|material:?)\s+([a-z\s]{3,30}?)(?:\.|,|$|\s+(?:with|and|for))",
                    formatters::material_phrase,
                ),
                PatternRule::new(
                    r"\b(stainless\s+steel|carbon\s+steel|aluminum|plastic|glass|ceramic|wood|silicone|rubber)\b",
                    formatters::title_cased,
                ),
            ],
        },
        LabelRules {
            label: labels::COLOR,
            rules: vec![PatternRule::new(
                r"(?:color|colour):?\s+([a-z\s]{3,20}?)(?:\.|,|$)",
                formatters::title_cased,
            )],
        },
        LabelRules {
            label: labels::TEMPERATURE_RANGE,
            rules: vec![PatternRule::new(
                r"(?:up to|max(?:imum)?)\s+(\d+)\s*(?:degrees?|°)?\s*(f|fahrenheit|c|celsius)?",
                formatters::temperature,
            )],
        },
        LabelRules {
            label: labels::SETTINGS,
            rules: vec![PatternRule::new(
                r"(\d+)\s+(?:precision\s+)?(?:speed|heat|temperature)\s+settings?",
                formatters::settings,
            )],
        },
        LabelRules {
            label: labels::PIECES,
            rules: vec![PatternRule::new(r"(\d+)\s*(?:-\s*)?piece", formatters::pieces)],
        },
    ]
}
