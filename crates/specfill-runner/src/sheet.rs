//! Spreadsheet catalogs. The first row of the first worksheet is the header.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Workbook, XlsxError};
use serde_json::{Number, Value};
use specfill_core::{Error, Result};

use crate::rows::{columns, Row};

/// Largest float that still maps exactly onto an integer cell value.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Read the first worksheet into rows keyed by header name.
///
/// Empty cells become `null`, so every row carries every column in header order.
pub fn read_sheet(path: &Path) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::Spreadsheet(format!("{}: {}", path.display(), e)))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Spreadsheet(format!("{} has no worksheets", path.display())))?
        .map_err(|e| Error::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let mut lines = range.rows();
    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Data::Empty => format!("Unnamed: {}", idx),
            other => other.to_string(),
        })
        .collect();

    let rows = lines
        .filter(|cells| cells.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|cells| {
            names
                .iter()
                .enumerate()
                .map(|(idx, name)| (name.clone(), cells.get(idx).map_or(Value::Null, cell_value)))
                .collect::<Row>()
        })
        .collect();
    Ok(rows)
}

/// Write rows as a single-sheet workbook, columns in first-seen order.
pub fn write_sheet(path: &Path, rows: &[Row]) -> Result<()> {
    let names = columns(rows);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in names.iter().enumerate() {
        sheet.write_string(0, col_index(col)?, name.as_str()).map_err(sheet_error)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let r = row_index(idx + 1)?;
        for (col, name) in names.iter().enumerate() {
            let c = col_index(col)?;
            match row.get(name) {
                None | Some(Value::Null) => {}
                Some(Value::String(s)) => {
                    sheet.write_string(r, c, s.as_str()).map_err(sheet_error)?;
                }
                Some(Value::Bool(b)) => {
                    sheet.write_boolean(r, c, *b).map_err(sheet_error)?;
                }
                Some(Value::Number(n)) => match n.as_f64() {
                    Some(f) => {
                        sheet.write_number(r, c, f).map_err(sheet_error)?;
                    }
                    None => {
                        sheet.write_string(r, c, n.to_string().as_str()).map_err(sheet_error)?;
                    }
                },
                Some(other) => {
                    sheet
                        .write_string(r, c, other.to_string().as_str())
                        .map_err(sheet_error)?;
                }
            }
        }
    }

    workbook.save(path).map_err(sheet_error)?;
    Ok(())
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_value(*f),
        other => Value::String(other.to_string()),
    }
}

/// Whole floats come back as integers, the way spreadsheet readers usually type them.
fn float_value(f: f64) -> Value {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INT {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}

fn row_index(idx: usize) -> Result<u32> {
    u32::try_from(idx).map_err(|_| Error::Spreadsheet(format!("too many rows: {}", idx)))
}

fn col_index(idx: usize) -> Result<u16> {
    u16::try_from(idx).map_err(|_| Error::Spreadsheet(format!("too many columns: {}", idx)))
}

fn sheet_error(e: XlsxError) -> Error {
    Error::Spreadsheet(e.to_string())
}
