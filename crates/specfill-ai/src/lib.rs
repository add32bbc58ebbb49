//! Delegated spec extraction through an external LLM messages API.
//!
//! Builds a plain-text product context, asks the model for a JSON array of
//! `"Label: Value"` strings, and validates the reply with the same value
//! gate the rule engine uses. Any failure degrades to an empty spec set.

pub mod config;
pub mod extractor;
pub mod prompt;
pub mod providers;
pub mod response;
pub mod types;

pub use config::AiConfig;
pub use extractor::AiExtractor;
pub use prompt::build_product_context;
pub use response::parse_spec_response;
