//! Pattern-catalog extraction over a single normalized text.
//!
//! Labels are visited in catalog order. For each label the rules are tried
//! in order and the first rule that matches and yields a validator-accepted
//! value wins; a later rule is only consulted when an earlier one either did
//! not match or produced nothing usable.

pub mod catalog;
pub mod formatters;

use specfill_core::SpecSet;

use crate::validate::is_valid_value;
pub use catalog::{LabelRules, PatternRule, CATALOG};

/// Run the catalog over `text`, stopping once `max_specs` labels are set.
pub fn extract_specs_from_text(text: &str, max_specs: usize, max_value_length: usize) -> SpecSet {
    let mut specs = SpecSet::new();
    let text_lower = text.to_lowercase();

    for label_rules in CATALOG.iter() {
        if specs.len() >= max_specs {
            break;
        }
        if let Some(value) = first_accepted(label_rules, &text_lower, max_value_length) {
            specs.insert_if_absent(label_rules.label, value);
        }
    }

    specs
}

/// First value from the label's rule list that the validator accepts.
pub fn first_accepted(label_rules: &LabelRules, text: &str, max_value_length: usize) -> Option<String> {
    label_rules.rules.iter().find_map(|rule| {
        rule.apply(text)
            .map(|v| v.trim().to_string())
            .filter(|v| is_valid_value(v, max_value_length))
    })
}
