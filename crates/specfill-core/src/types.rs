//! Per-record input context and the ordered spec set produced from it.

use serde::{Deserialize, Serialize};

/// Label names used by the rule engine.
pub mod labels {
    pub const DIMENSIONS: &str = "Dimensions";
    pub const WEIGHT: &str = "Weight";
    pub const CAPACITY: &str = "Capacity";
    pub const POWER: &str = "Power";
    pub const VOLTAGE: &str = "Voltage";
    pub const MATERIAL: &str = "Material";
    pub const COLOR: &str = "Color";
    pub const TEMPERATURE_RANGE: &str = "Temperature Range";
    pub const SETTINGS: &str = "Settings";
    pub const PIECES: &str = "Pieces";
    pub const BRAND: &str = "Brand";
    pub const CATEGORY: &str = "Category";
    pub const FEATURE: &str = "Feature";
    pub const INCLUDED: &str = "Included";
}

/// Text signals for one product record. `None` means no signal from that source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductContext {
    pub title: Option<String>,
    pub description_html: Option<String>,
    pub category: Option<String>,
    pub vendor: Option<String>,
    pub material_hint: Option<String>,
}

impl ProductContext {
    /// True when no source carries any text at all.
    pub fn is_empty(&self) -> bool {
        [
            &self.title,
            &self.description_html,
            &self.category,
            &self.vendor,
            &self.material_hint,
        ]
        .iter()
        .all(|f| f.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// A single `Label: Value` specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

impl std::fmt::Display for SpecEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Ordered, label-unique collection of specs for one record.
///
/// Insertion order is the output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecSet {
    entries: Vec<SpecEntry>,
}

impl SpecSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e.label == label)
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    /// Add the entry unless the label is already present. Returns whether it was added.
    pub fn insert_if_absent(&mut self, label: impl Into<String>, value: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.entries.push(SpecEntry {
            label,
            value: value.into(),
        });
        true
    }

    /// Set the value for a label, replacing an existing value in place.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(existing) => existing.value = value,
            None => self.entries.push(SpecEntry { label, value }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpecEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Render as ordered `"Label: Value"` lines.
    pub fn to_lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a SpecSet {
    type Item = &'a SpecEntry;
    type IntoIter = std::slice::Iter<'a, SpecEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent_keeps_first() {
        let mut set = SpecSet::new();
        assert!(set.insert_if_absent(labels::WEIGHT, "4.5 lbs"));
        assert!(!set.insert_if_absent(labels::WEIGHT, "2 kg"));
        assert_eq!(set.get(labels::WEIGHT), Some("4.5 lbs"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut set = SpecSet::new();
        set.insert(labels::FEATURE, "first feature text");
        set.insert(labels::BRAND, "Salton");
        set.insert(labels::FEATURE, "second feature text");
        assert_eq!(
            set.to_lines(),
            vec!["Feature: second feature text", "Brand: Salton"]
        );
    }

    #[test]
    fn test_serializes_as_entry_list() {
        let mut set = SpecSet::new();
        set.insert(labels::COLOR, "Red");
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["label"], "Color");
        assert_eq!(json[0]["value"], "Red");
    }

    #[test]
    fn test_context_is_empty() {
        assert!(ProductContext::default().is_empty());
        let ctx = ProductContext {
            vendor: Some("  ".into()),
            ..Default::default()
        };
        assert!(ctx.is_empty());
        let ctx = ProductContext {
            title: Some("Acme Blender".into()),
            ..Default::default()
        };
        assert!(!ctx.is_empty());
    }
}
