//! Runner: drives an extractor over every row and records the outcome.

use std::path::{Path, PathBuf};

use serde_json::Value;
use specfill_core::{Result, SpecExtractor};
use tracing::{debug, info};

use crate::rows::{
    context_from_row, has_existing_specs, serialize_specs, CatalogFormat, Row, SPEC_COLUMN,
};
use crate::types::*;

/// Applies one extraction strategy to a batch of rows.
pub struct Runner {
    options: RunOptions,
}

impl Runner {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Populate the spec column of each eligible row in place.
    pub async fn run(&self, rows: &mut [Row], extractor: &dyn SpecExtractor) -> Result<RunReport> {
        let remote = extractor.is_remote();
        let total = rows.len();
        let mut report = RunReport {
            strategy: extractor.name().to_string(),
            total,
            ..Default::default()
        };

        if !self.options.quiet {
            info!("Processing {} rows with the {} extractor", total, extractor.name());
        }

        for (idx, row) in rows.iter_mut().enumerate() {
            if has_existing_specs(row) && !self.options.overwrite {
                report.already_populated += 1;
                continue;
            }

            let context = context_from_row(row);
            let specs = extractor.extract(&context).await;
            if remote {
                report.api_calls += 1;
            }

            if specs.is_empty() {
                if remote {
                    report.failed += 1;
                } else {
                    report.skipped += 1;
                }
                debug!("Row {}: no specs", idx + 1);
            } else {
                let cell = serialize_specs(&specs)?;
                row.insert(SPEC_COLUMN.to_string(), Value::String(cell));
                report.newly_populated += 1;
                report.specs_extracted += specs.len();

                if report.samples.len() < SAMPLE_LIMIT {
                    report.samples.push(SpecSample {
                        title: context.title.clone().unwrap_or_else(|| "Unknown".into()),
                        specs: specs.to_lines(),
                    });
                }
            }

            if !self.options.quiet && (idx + 1) % 10 == 0 {
                info!("Processed {}/{} rows", idx + 1, total);
            }

            if remote && !self.options.delay.is_zero() {
                tokio::time::sleep(self.options.delay).await;
            }
        }

        Ok(report)
    }
}

/// `<stem>_with_specs.<ext>` next to the input, or `_with_ai_specs` for remote
/// strategies. JSON input stays JSON; workbooks are written as `.xlsx`.
pub fn default_output_path(input: &Path, remote: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "products".into());
    let suffix = if remote { "_with_ai_specs" } else { "_with_specs" };
    let format = match CatalogFormat::from_path(input) {
        Ok(format) => format,
        Err(_) => CatalogFormat::Spreadsheet,
    };
    input.with_file_name(format!("{}{}.{}", stem, suffix, format.output_extension()))
}

/// Print the run summary. `cost_per_call` is shown for remote strategies only.
pub fn print_report(report: &RunReport, output: &Path, cost_per_call: Option<f64>) {
    println!("=== Spec Population Report ===");
    println!();

    for sample in &report.samples {
        println!("+ {}", sample.title);
        for spec in &sample.specs {
            println!("    - {}", spec);
        }
    }
    if !report.samples.is_empty() {
        println!();
    }

    println!("Strategy:           {}", report.strategy);
    println!("Total rows:         {}", report.total);
    println!("Already had specs:  {}", report.already_populated);
    println!("Newly populated:    {}", report.newly_populated);
    match cost_per_call {
        Some(_) => println!("Failed:             {}", report.failed),
        None => println!("Skipped (no data):  {}", report.skipped),
    }
    println!("Specs extracted:    {}", report.specs_extracted);
    if let Some(avg) = report.average_specs() {
        println!("Average per row:    {:.1}", avg);
    }
    if let Some(cost) = cost_per_call {
        println!("API calls:          {}", report.api_calls);
        println!("Estimated cost:     ${:.2}", report.estimated_cost(cost));
    }

    println!();
    println!("Output: {}", output.display());
}
