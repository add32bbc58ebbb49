//! Runner types.

use std::time::Duration;

use serde::Serialize;

/// Default pause between delegated extraction calls.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Records sampled into the report.
pub const SAMPLE_LIMIT: usize = 3;

/// Per-run switches.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Re-extract rows that already carry a spec list.
    pub overwrite: bool,
    /// Suppress progress logging.
    pub quiet: bool,
    /// Pause after each remote extraction.
    pub delay: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            quiet: false,
            delay: DEFAULT_DELAY,
        }
    }
}

/// A populated record shown in the report.
#[derive(Debug, Clone, Serialize)]
pub struct SpecSample {
    pub title: String,
    pub specs: Vec<String>,
}

/// Counters for one pass over the rows.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub strategy: String,
    pub total: usize,
    pub already_populated: usize,
    pub newly_populated: usize,
    /// Rule strategy: rows with no extractable data.
    pub skipped: usize,
    /// Delegated strategy: rows where the call produced nothing.
    pub failed: usize,
    pub specs_extracted: usize,
    pub api_calls: usize,
    pub samples: Vec<SpecSample>,
}

impl RunReport {
    /// Average spec count over newly populated rows.
    pub fn average_specs(&self) -> Option<f64> {
        if self.newly_populated == 0 {
            None
        } else {
            Some(self.specs_extracted as f64 / self.newly_populated as f64)
        }
    }

    pub fn estimated_cost(&self, cost_per_call: f64) -> f64 {
        self.api_calls as f64 * cost_per_call
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_specs() {
        let mut report = RunReport::default();
        assert_eq!(report.average_specs(), None);
        report.newly_populated = 4;
        report.specs_extracted = 18;
        assert_eq!(report.average_specs(), Some(4.5));
    }

    #[test]
    fn test_estimated_cost() {
        let report = RunReport {
            api_calls: 100,
            ..Default::default()
        };
        assert!((report.estimated_cost(0.0003) - 0.03).abs() < 1e-9);
    }

    #[test]
    fn test_default_options() {
        let options = RunOptions::default();
        assert!(!options.overwrite);
        assert_eq!(options.delay, Duration::from_millis(500));
    }
}
