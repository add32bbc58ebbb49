//! Spec merge engine: combines every text source of a record into one spec set.
//!
//! Sources are visited in a fixed priority order and each step only fills
//! labels that are still free, so earlier sources always win:
//! description → title → brand → category → material hint → feature phrases.

use async_trait::async_trait;
use specfill_core::{labels, ExtractionLimits, ProductContext, SpecExtractor, SpecSet};
use tracing::debug;

use crate::brand::resolve_brand;
use crate::features::extract_key_features;
use crate::normalize::clean_html;
use crate::rules::extract_specs_from_text;
use crate::validate::is_valid_value;

/// Extract the spec set for a record with default limits.
pub fn extract_specs(context: &ProductContext) -> SpecSet {
    merge(context)
}

/// Merge all sources of `context` with default limits.
pub fn merge(context: &ProductContext) -> SpecSet {
    merge_with_limits(context, &ExtractionLimits::default())
}

/// Merge all sources of `context` under explicit limits.
pub fn merge_with_limits(context: &ProductContext, limits: &ExtractionLimits) -> SpecSet {
    let mut specs = SpecSet::new();
    let description = context
        .description_html
        .as_deref()
        .map(|html| clean_html(Some(html)));

    // 1. Description body
    if let Some(text) = &description {
        let found = extract_specs_from_text(text, limits.description_cap, limits.max_value_length);
        debug!("Description pass: {} specs", found.len());
        for entry in found.iter() {
            specs.insert_if_absent(entry.label.as_str(), entry.value.as_str());
        }
    }

    // 2. Title
    if let Some(title) = context.title.as_deref() {
        let clean_title = clean_html(Some(title));
        let found = extract_specs_from_text(&clean_title, limits.title_cap, limits.max_value_length);
        debug!("Title pass: {} specs", found.len());
        for entry in found.iter() {
            specs.insert_if_absent(entry.label.as_str(), entry.value.as_str());
        }
    }

    let accept = |v: &str| is_valid_value(v, limits.max_value_length);

    // 3. Brand
    if let Some(brand) = resolve_brand(context.title.as_deref(), context.vendor.as_deref())
        .filter(|b| accept(b.as_str()))
    {
        specs.insert_if_absent(labels::BRAND, brand);
    }

    // 4. Category
    if let Some(category) =
        trimmed_within(context.category.as_deref(), 3, 50).filter(|&c| accept(c))
    {
        specs.insert(labels::CATEGORY, category);
    }

    // 5. Material metadata
    if let Some(material) =
        trimmed_within(context.material_hint.as_deref(), 3, 30).filter(|&m| accept(m))
    {
        specs.insert_if_absent(labels::MATERIAL, material);
    }

    // 6. Feature phrases, only for sparse records
    if let Some(text) = &description {
        let wanted = limits.feature_request(specs.len());
        if wanted > 0 {
            for (label, phrase) in extract_key_features(text, wanted, limits.max_value_length) {
                specs.insert(label, phrase);
            }
        }
    }

    debug!("Merged {} specs", specs.len());
    specs
}

/// The trimmed value if its length is strictly between `min` and `max` characters.
fn trimmed_within(value: Option<&str>, min: usize, max: usize) -> Option<&str> {
    let value = value?.trim();
    let len = value.chars().count();
    (len > min && len < max).then_some(value)
}

/// Rule-based extraction strategy.
#[derive(Debug, Clone, Default)]
pub struct RuleExtractor {
    limits: ExtractionLimits,
}

impl RuleExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ExtractionLimits) -> Self {
        Self { limits }
    }

    /// Synchronous extraction; the trait method delegates here.
    pub fn extract_now(&self, context: &ProductContext) -> SpecSet {
        merge_with_limits(context, &self.limits)
    }
}

#[async_trait]
impl SpecExtractor for RuleExtractor {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn extract(&self, context: &ProductContext) -> SpecSet {
        self.extract_now(context)
    }
}
