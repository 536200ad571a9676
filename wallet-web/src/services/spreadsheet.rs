//! Spreadsheet ingestion for bulk allocations.
//!
//! First worksheet only, header-driven: the columns named `address` and
//! `amount` feed the same row validation as the manual text inputs, so a
//! workbook cannot smuggle in anything a typed form would reject.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use shared::bulk::{validate_row, BulkParseError};
use shared::types::BulkRow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpreadsheetError {
    #[error("could not read workbook: {0}")]
    Workbook(String),
    #[error("workbook has no sheets")]
    NoSheet,
    #[error("first sheet needs an `address` and an `amount` column")]
    MissingColumns,
    #[error("sheet must contain at least one data row")]
    Empty,
    #[error("row {row}: {source}")]
    Row { row: usize, source: BulkParseError },
}

/// Parse an `.xlsx` workbook into validated bulk rows.
///
/// Blank rows are skipped; any other defect aborts the whole upload with
/// the 1-based spreadsheet row number attached.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<BulkRow>, SpreadsheetError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes.to_vec()))
        .map_err(|err| SpreadsheetError::Workbook(err.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SpreadsheetError::NoSheet)?
        .map_err(|err| SpreadsheetError::Workbook(err.to_string()))?;

    let mut rows = range.rows();
    let header = rows.next().ok_or(SpreadsheetError::MissingColumns)?;
    let address_col = find_column(header, "address").ok_or(SpreadsheetError::MissingColumns)?;
    let amount_col = find_column(header, "amount").ok_or(SpreadsheetError::MissingColumns)?;

    let mut parsed = Vec::new();
    for (index, row) in rows.enumerate() {
        let address = cell_text(row.get(address_col));
        let amount = cell_number(row.get(amount_col));
        if address.is_empty() && amount.is_none() {
            continue;
        }
        let row_number = index + 2; // 1-based, after the header row
        let amount = amount.unwrap_or(f64::NAN);
        let parsed_row = validate_row(&address, amount)
            .map_err(|source| SpreadsheetError::Row { row: row_number, source })?;
        parsed.push(parsed_row);
    }

    if parsed.is_empty() {
        return Err(SpreadsheetError::Empty);
    }
    Ok(parsed)
}

/// Read the selected browser file into memory.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, SpreadsheetError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| SpreadsheetError::Workbook("could not read the selected file".to_string()))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn find_column(header: &[Data], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| cell_text(Some(cell)).eq_ignore_ascii_case(name))
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::Empty) | None => String::new(),
        Some(Data::String(text)) => text.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

fn cell_number(cell: Option<&Data>) -> Option<f64> {
    match cell {
        Some(Data::Float(value)) => Some(*value),
        Some(Data::Int(value)) => Some(*value as f64),
        Some(Data::String(text)) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_match_is_case_insensitive() {
        let header = vec![
            Data::String("Address".to_string()),
            Data::String("AMOUNT".to_string()),
        ];
        assert_eq!(find_column(&header, "address"), Some(0));
        assert_eq!(find_column(&header, "amount"), Some(1));
        assert_eq!(find_column(&header, "category"), None);
    }

    #[test]
    fn amount_cells_accept_numbers_and_numeric_strings() {
        assert_eq!(cell_number(Some(&Data::Float(250.0))), Some(250.0));
        assert_eq!(cell_number(Some(&Data::Int(100))), Some(100.0));
        assert_eq!(cell_number(Some(&Data::String(" 42 ".to_string()))), Some(42.0));
        assert_eq!(cell_number(Some(&Data::String("lots".to_string()))), None);
        assert_eq!(cell_number(Some(&Data::Empty)), None);
        assert_eq!(cell_number(None), None);
    }

    #[test]
    fn text_cells_trim_and_stringify() {
        assert_eq!(cell_text(Some(&Data::String("  0xabc  ".to_string()))), "0xabc");
        assert_eq!(cell_text(Some(&Data::Empty)), "");
        assert_eq!(cell_text(None), "");
    }

    #[test]
    fn garbage_bytes_fail_as_workbook_error() {
        assert!(matches!(
            parse_workbook(b"definitely not a zip archive"),
            Err(SpreadsheetError::Workbook(_))
        ));
    }
}
