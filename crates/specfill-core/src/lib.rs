//! SpecFill Core: product context, spec sets, extraction limits, extractor capability.

pub mod config;
pub mod error;
pub mod extractor;
pub mod types;

pub use config::ExtractionLimits;
pub use error::{Error, Result};
pub use extractor::SpecExtractor;
pub use types::{labels, ProductContext, SpecEntry, SpecSet};
