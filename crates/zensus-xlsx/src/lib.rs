//! Zensus 2022 housing table import.
//!
//! Loads the source spreadsheet once into a read-only [`Dataset`]. The
//! importer is deliberately conservative: rows outside the three supported
//! region levels are dropped, the national aggregate label is rewritten to
//! its canonical display name, and numeric fields are captured as raw cell
//! payloads without coercion (coercion happens in the group transformer so
//! that display semantics can distinguish "missing" from zero).

use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use thiserror::Error;
use zensus_model::{fields, Dataset, FieldValue, RegionLevel, RegionRecord};

/// Non-fatal condition encountered while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub message: String,
}

impl LoadWarning {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct LoadResult {
    pub dataset: Dataset,
    pub warnings: Vec<LoadWarning>,
}

/// Fatal load failure: the dashboard cannot proceed without a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read xlsx: {0}")]
    Xlsx(#[from] calamine::XlsxError),
    #[error("workbook has no worksheets")]
    NoWorksheet,
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("no usable rows at a supported region level")]
    Empty,
}

/// Load the census table from an `.xlsx` workbook (first worksheet, header
/// row first).
pub fn load_dataset(path: impl AsRef<Path>) -> Result<LoadResult, LoadError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::NoWorksheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or(LoadError::Empty)?
        .iter()
        .map(header_text)
        .collect();

    let name_col = column_index(&headers, fields::REGION_NAME)?;
    let level_col = column_index(&headers, fields::REGION_LEVEL)?;

    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut seen: HashSet<(RegionLevel, String)> = HashSet::new();

    for (row_index, row) in rows.enumerate() {
        // `rows` already consumed the header, so sheet row = index + 2 in
        // 1-based spreadsheet terms.
        let sheet_row = row_index + 2;

        let Some(level) = cell_text(row.get(level_col)).and_then(|label| {
            RegionLevel::from_source_label(label.trim())
        }) else {
            // Aggregation levels beyond Bund/Land/Kreis exist in the source
            // table and are simply out of scope.
            continue;
        };

        let Some(region) = cell_text(row.get(name_col)).map(|name| name.trim().to_string()) else {
            warn(
                &mut warnings,
                format!("row {sheet_row}: missing region name; row skipped"),
            );
            continue;
        };
        if region.is_empty() {
            warn(
                &mut warnings,
                format!("row {sheet_row}: empty region name; row skipped"),
            );
            continue;
        }

        let region = if region == fields::NATIONAL_SOURCE_LABEL {
            fields::NATIONAL_DISPLAY_LABEL.to_string()
        } else {
            region
        };

        if !seen.insert((level, region.clone())) {
            warn(
                &mut warnings,
                format!("row {sheet_row}: duplicate region `{region}` at level {level}; row skipped"),
            );
            continue;
        }

        let mut record = RegionRecord::new(region, level);
        for (col, header) in headers.iter().enumerate() {
            if col == name_col || col == level_col || header.is_empty() {
                continue;
            }
            let value = convert_value(row.get(col));
            if !value.is_blank() {
                record.set_field(header.clone(), value);
            }
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(LoadResult {
        dataset: Dataset::new(records),
        warnings,
    })
}

fn warn(warnings: &mut Vec<LoadWarning>, message: String) {
    log::warn!("{message}");
    warnings.push(LoadWarning::new(message));
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(LoadError::MissingColumn(name))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_text(cell: Option<&Data>) -> Option<&str> {
    match cell? {
        Data::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Raw cell payload, without numeric coercion of text.
fn convert_value(cell: Option<&Data>) -> FieldValue {
    match cell {
        Some(Data::Float(v)) => FieldValue::Number(*v),
        Some(Data::Int(v)) => FieldValue::Number(*v as f64),
        Some(Data::String(s)) => {
            if s.trim().is_empty() {
                FieldValue::Blank
            } else {
                FieldValue::Text(s.clone())
            }
        }
        Some(Data::Bool(b)) => FieldValue::Number(if *b { 1.0 } else { 0.0 }),
        // Errors, date/duration cells, and empties carry no usable quantity.
        _ => FieldValue::Blank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_value_keeps_text_raw() {
        assert_eq!(
            convert_value(Some(&Data::String("n/a".to_string()))),
            FieldValue::Text("n/a".to_string())
        );
        assert_eq!(convert_value(Some(&Data::Float(3.5))), FieldValue::Number(3.5));
        assert_eq!(convert_value(Some(&Data::Int(7))), FieldValue::Number(7.0));
        assert_eq!(convert_value(Some(&Data::Empty)), FieldValue::Blank);
        assert_eq!(convert_value(None), FieldValue::Blank);
    }

    #[test]
    fn header_text_trims() {
        assert_eq!(header_text(&Data::String(" QMMIETE ".to_string())), "QMMIETE");
        assert_eq!(header_text(&Data::Empty), "");
    }
}
