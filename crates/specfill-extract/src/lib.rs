//! SpecFill Extract: rule-based product specification extraction.
//!
//! Normalizes product text, runs an ordered pattern catalog with per-label
//! formatters, gates every candidate through a generic validator, and merges
//! the results from all of a record's text sources under a fixed priority.

pub mod brand;
pub mod features;
pub mod merge;
pub mod normalize;
pub mod rules;
pub mod validate;

pub use brand::resolve_brand;
pub use features::extract_key_features;
pub use merge::{extract_specs, merge, merge_with_limits, RuleExtractor};
pub use normalize::clean_html;
pub use rules::extract_specs_from_text;
pub use validate::{is_valid, is_valid_value};
