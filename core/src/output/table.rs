use crate::error::{BatchError, Result};
use crate::types::ResultRow;
use std::path::Path;

use super::xlsx::{SheetEncoder, XlsxEncoder};

/// Name of the single sheet in the output workbook
pub const RESULTS_SHEET: &str = "Results";

/// Header plus accumulated result rows
///
/// Row 0 is the header. Data rows are appended after it and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    sheet_name: String,
    header: Vec<String>,
    rows: Vec<ResultRow>,
}

impl OutputTable {
    /// Creates a table on the `Results` sheet with the given header
    pub fn new(header: Vec<String>) -> Self {
        Self::with_sheet_name(RESULTS_SHEET, header)
    }

    pub fn with_sheet_name(sheet_name: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            header,
            rows: Vec::new(),
        }
    }

    /// Appends a row and returns the sheet row index it occupies
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::RowWidth`] if the row is not as wide as the header.
    pub fn append_row(&mut self, row: ResultRow) -> Result<usize> {
        if row.len() != self.header.len() {
            return Err(BatchError::RowWidth {
                expected: self.header.len(),
                actual: row.len(),
            });
        }
        let index = self.next_row();
        self.rows.push(row);
        Ok(index)
    }

    /// Sheet row index the next appended row will occupy
    pub fn next_row(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Writes the table to an `.xlsx` file, replacing any existing file
    pub fn flush(&self, path: &Path) -> Result<()> {
        self.flush_with(path, &XlsxEncoder)
    }

    /// Writes the table with a specific encoder
    pub fn flush_with(&self, path: &Path, encoder: &dyn SheetEncoder) -> Result<()> {
        encoder.encode(self, path)
    }
}
