//! Recipient name extraction from uploaded spreadsheets.
//!
//! Only the first sheet is read. For each row of its used range, the cell in
//! column A becomes a name when it holds text that is not blank once trimmed.
//! Numbers, booleans, dates and empty cells are skipped. There is no header
//! detection: a textual header such as `Name` in A1 is returned like any other
//! row.
//!
//! Workbook decoding is delegated to `calamine`, which detects the format from
//! the file contents; [`accepts`] only gates on the declared MIME type and file
//! extension, as the upload widgets do before reading any bytes.

use crate::error::CertificateError;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLS_MIME: &str = "application/vnd.ms-excel";

/// Value for the `accept` attribute of spreadsheet file inputs.
pub const ACCEPT_ATTR: &str = ".xlsx,.xls";

/// What the browser (or a multipart part) tells us about a file before its bytes are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub file_name: String,
    pub mime: String,
}

impl FileMeta {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
        }
    }
}

/// `true` when the declared type or the extension is one of the accepted spreadsheet formats.
pub fn accepts(meta: &FileMeta) -> bool {
    let mime = meta.mime.trim();
    let name = meta.file_name.to_ascii_lowercase();
    mime == XLSX_MIME || mime == XLS_MIME || name.ends_with(".xlsx") || name.ends_with(".xls")
}

/// Keeps the textual, non-blank cells, trimmed, in input order.
pub fn names_from_cells<'a, I>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a Data>>,
{
    cells
        .into_iter()
        .filter_map(|cell| match cell {
            Some(Data::String(text)) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            _ => None,
        })
        .collect()
}

/// Reads the recipient names out of a spreadsheet upload.
///
/// # Errors
/// - [`CertificateError::UnsupportedFormat`] when `meta` is not a spreadsheet.
/// - [`CertificateError::ReadError`] when the bytes cannot be decoded or the
///   workbook has no sheet.
/// - [`CertificateError::NoNamesFound`] when column A yields nothing.
pub fn extract_names(meta: &FileMeta, bytes: &[u8]) -> Result<Vec<String>, CertificateError> {
    if !accepts(meta) {
        return Err(CertificateError::UnsupportedFormat);
    }

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| CertificateError::ReadError(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CertificateError::ReadError("workbook has no sheets".to_string()))?
        .map_err(|e| CertificateError::ReadError(e.to_string()))?;

    let names = match (range.start(), range.end()) {
        (Some((first_row, _)), Some((last_row, _))) => {
            names_from_cells((first_row..=last_row).map(|row| range.get_value((row, 0))))
        }
        _ => Vec::new(),
    };

    if names.is_empty() {
        Err(CertificateError::NoNamesFound)
    } else {
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_xlsxwriter::Workbook;

    fn xlsx_meta() -> FileMeta {
        FileMeta::new("participants.xlsx", XLSX_MIME)
    }

    /// Column A content for a generated test workbook.
    enum Cell {
        Text(&'static str),
        Number(f64),
        Empty,
    }

    fn workbook_with_column(cells: &[Cell]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (row, cell) in cells.iter().enumerate() {
            let row = row as u32;
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(row, 0, *text).unwrap();
                }
                Cell::Number(n) => {
                    sheet.write_number(row, 0, *n).unwrap();
                }
                Cell::Empty => {}
            }
            // A second column keeps every row inside the used range.
            sheet.write_string(row, 1, "x").unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn accepts_by_mime_or_extension() {
        assert!(accepts(&FileMeta::new("a.bin", XLSX_MIME)));
        assert!(accepts(&FileMeta::new("a.bin", XLS_MIME)));
        assert!(accepts(&FileMeta::new("Names.XLSX", "")));
        assert!(accepts(&FileMeta::new("legacy.xls", "application/octet-stream")));
        assert!(!accepts(&FileMeta::new("names.csv", "text/csv")));
        assert!(!accepts(&FileMeta::new("names.xlsx.txt", "text/plain")));
    }

    #[test]
    fn filters_cells_by_type_and_content() {
        let cells = [
            Data::String("Alice".into()),
            Data::String(String::new()),
            Data::Float(42.0),
            Data::String("  Bob  ".into()),
            Data::Bool(true),
            Data::String(" \t ".into()),
            Data::Empty,
            Data::String("Carol".into()),
        ];
        let mut input: Vec<Option<&Data>> = cells.iter().map(Some).collect();
        input.insert(2, None);

        assert_eq!(names_from_cells(input), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn extracts_first_column_names_in_row_order() {
        let bytes = workbook_with_column(&[
            Cell::Text("Alice"),
            Cell::Empty,
            Cell::Number(42.0),
            Cell::Text("  Bob  "),
            Cell::Text("Carol"),
        ]);

        let names = extract_names(&xlsx_meta(), &bytes).unwrap();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn header_rows_are_kept() {
        let bytes = workbook_with_column(&[Cell::Text("Name"), Cell::Text("Dana")]);
        let names = extract_names(&xlsx_meta(), &bytes).unwrap();
        assert_eq!(names, vec!["Name", "Dana"]);
    }

    #[test]
    fn only_the_first_sheet_is_read() {
        let mut workbook = Workbook::new();
        workbook.add_worksheet().write_string(0, 0, "First").unwrap();
        workbook.add_worksheet().write_string(0, 0, "Second").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(extract_names(&xlsx_meta(), &bytes).unwrap(), vec!["First"]);
    }

    #[test]
    fn names_outside_column_a_are_ignored() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 1, "Not a name").unwrap();
        sheet.write_string(1, 1, "Neither").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(
            extract_names(&xlsx_meta(), &bytes),
            Err(CertificateError::NoNamesFound)
        );
    }

    #[test]
    fn numeric_only_column_reports_no_names() {
        let bytes = workbook_with_column(&[Cell::Number(1.0), Cell::Number(2.0), Cell::Empty]);
        assert_eq!(
            extract_names(&xlsx_meta(), &bytes),
            Err(CertificateError::NoNamesFound)
        );
    }

    #[test]
    fn wrong_type_is_rejected_before_reading() {
        let meta = FileMeta::new("names.csv", "text/csv");
        assert_eq!(
            extract_names(&meta, b"Alice\nBob\n"),
            Err(CertificateError::UnsupportedFormat)
        );
    }

    #[test]
    fn corrupt_bytes_are_a_read_error() {
        let result = extract_names(&xlsx_meta(), b"definitely not a workbook");
        assert!(matches!(result, Err(CertificateError::ReadError(_))));
    }
}
