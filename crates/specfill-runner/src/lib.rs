//! Batch runner: walks catalog rows, applies the skip/overwrite policy,
//! writes serialized spec lists back and tallies a run report.

pub mod orchestrator;
pub mod rows;
pub mod sheet;
pub mod types;

pub use orchestrator::{default_output_path, print_report, Runner};
pub use rows::{load_rows, save_rows, CatalogFormat, Row};
pub use types::*;
