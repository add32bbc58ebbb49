//! Catalog rows as JSON objects keyed by column name, stored as JSON or xlsx.

use std::path::Path;

use serde_json::{Map, Value};
use specfill_core::{Error, ProductContext, Result, SpecSet};

use crate::sheet;

pub const TITLE_COLUMN: &str = "Title";
pub const BODY_COLUMN: &str = "Body HTML";
pub const TYPE_COLUMN: &str = "Type";
pub const VENDOR_COLUMN: &str = "Vendor";
pub const MATERIAL_COLUMN: &str = "Metafield: custom.product_material [single_line_text_field]";
pub const SPEC_COLUMN: &str = "Metafield: custom.spec_list [list.single_line_text_field]";

pub type Row = Map<String, Value>;

/// On-disk catalog layout, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Spreadsheet,
}

impl CatalogFormat {
    /// Format for reading `path`: `.json`, or a workbook (`.xlsx`, `.xlsm`, `.xls`, `.ods`).
    pub fn from_path(path: &Path) -> Result<Self> {
        match extension(path).as_deref() {
            Some("json") => Ok(Self::Json),
            Some("xlsx" | "xlsm" | "xls" | "ods") => Ok(Self::Spreadsheet),
            _ => Err(Error::Row(format!(
                "unsupported catalog file: {}",
                path.display()
            ))),
        }
    }

    /// Extension written for output in this format.
    pub fn output_extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Spreadsheet => "xlsx",
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Load a catalog from a JSON array of row objects or the first worksheet of a workbook.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    match CatalogFormat::from_path(path)? {
        CatalogFormat::Json => load_json(path),
        CatalogFormat::Spreadsheet => sheet::read_sheet(path),
    }
}

/// Save to `.json` or `.xlsx`; other extensions are rejected.
pub fn save_rows(path: &Path, rows: &[Row]) -> Result<()> {
    match extension(path).as_deref() {
        Some("json") => save_json(path, rows),
        Some("xlsx") => sheet::write_sheet(path, rows),
        _ => Err(Error::Row(format!(
            "can only write .json or .xlsx catalogs: {}",
            path.display()
        ))),
    }
}

fn load_json(path: &Path) -> Result<Vec<Row>> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    let Value::Array(items) = value else {
        return Err(Error::Row(format!(
            "{} must contain a JSON array of rows",
            path.display()
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(row) => Ok(row),
            other => Err(Error::Row(format!(
                "row {} is not an object: {}",
                idx + 1,
                other
            ))),
        })
        .collect()
}

fn save_json(path: &Path, rows: &[Row]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Every column name across `rows`, in first-seen order.
pub fn columns(rows: &[Row]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for key in rows.iter().flat_map(|row| row.keys()) {
        if !names.contains(key) {
            names.push(key.clone());
        }
    }
    names
}

/// Column value as text. Null and missing are absent; other scalars are stringified.
pub fn field(row: &Row, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn context_from_row(row: &Row) -> ProductContext {
    ProductContext {
        title: field(row, TITLE_COLUMN),
        description_html: field(row, BODY_COLUMN),
        category: field(row, TYPE_COLUMN),
        vendor: field(row, VENDOR_COLUMN),
        material_hint: field(row, MATERIAL_COLUMN),
    }
}

pub fn has_existing_specs(row: &Row) -> bool {
    field(row, SPEC_COLUMN).is_some_and(|v| !v.trim().is_empty())
}

/// Spec list cell text: a JSON array of `"Label: Value"` strings.
pub fn serialize_specs(specs: &SpecSet) -> Result<String> {
    Ok(serde_json::to_string(&specs.to_lines())?)
}
