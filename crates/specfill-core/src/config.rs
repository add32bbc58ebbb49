//! Extraction limits shared by the rule engine and its callers.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Caps and thresholds applied by the merge engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionLimits {
    /// Max labels taken from the description pass.
    #[serde(default = "default_description_cap")]
    pub description_cap: usize,
    /// Max labels taken from the title pass.
    #[serde(default = "default_title_cap")]
    pub title_cap: usize,
    /// Feature phrases are mined only while the set holds fewer entries than this.
    #[serde(default = "default_feature_trigger")]
    pub feature_trigger: usize,
    /// Total entry budget the feature pass may fill up to.
    #[serde(default = "default_feature_budget")]
    pub feature_budget: usize,
    /// Max feature phrases per record.
    #[serde(default = "default_max_features")]
    pub max_features: usize,
    /// Longest value the validator accepts, in characters.
    #[serde(default = "default_max_value_length")]
    pub max_value_length: usize,
}

fn default_description_cap() -> usize {
    5
}
fn default_title_cap() -> usize {
    2
}
fn default_feature_trigger() -> usize {
    4
}
fn default_feature_budget() -> usize {
    5
}
fn default_max_features() -> usize {
    2
}
fn default_max_value_length() -> usize {
    100
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            description_cap: default_description_cap(),
            title_cap: default_title_cap(),
            feature_trigger: default_feature_trigger(),
            feature_budget: default_feature_budget(),
            max_features: default_max_features(),
            max_value_length: default_max_value_length(),
        }
    }
}

impl ExtractionLimits {
    /// Defaults, overridden by `SPECFILL_DESCRIPTION_CAP`, `SPECFILL_TITLE_CAP`
    /// and `SPECFILL_MAX_FEATURES` when set to a valid number.
    pub fn from_env() -> Self {
        let mut limits = Self::default();
        if let Some(v) = env_usize("SPECFILL_DESCRIPTION_CAP") {
            limits.description_cap = v;
        }
        if let Some(v) = env_usize("SPECFILL_TITLE_CAP") {
            limits.title_cap = v;
        }
        if let Some(v) = env_usize("SPECFILL_MAX_FEATURES") {
            limits.max_features = v;
        }
        limits
    }

    /// How many feature phrases to request given the current set size.
    ///
    /// Zero when the set is already at or above the trigger.
    pub fn feature_request(&self, current: usize) -> usize {
        if current >= self.feature_trigger {
            return 0;
        }
        self.max_features
            .min(self.feature_budget.saturating_sub(current))
    }
}

fn env_usize(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}
