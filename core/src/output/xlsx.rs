use crate::error::Result;
use crate::types::CellValue;
use log::{debug, warn};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

use super::table::OutputTable;

/// Serializes an [`OutputTable`] to a file
pub trait SheetEncoder {
    /// Writes `table` to `path`, creating or truncating the file
    fn encode(&self, table: &OutputTable, path: &Path) -> Result<()>;
}

/// Longest text a single Excel cell can hold, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

/// Largest integer magnitude an Excel number holds exactly
const MAX_EXACT_INT: u64 = 1 << 53;

/// Excel workbook encoder
///
/// Text cells are written as strings and numeric cells as numbers. Empty
/// cells are left blank. Text longer than [`MAX_CELL_CHARS`] is cut to the
/// limit, and integers beyond the exact range of a double are written as
/// text.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxEncoder;

impl SheetEncoder for XlsxEncoder {
    fn encode(&self, table: &OutputTable, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.sheet_name())?;

        for (col, name) in table.header().iter().enumerate() {
            worksheet.write_string(0, column(col)?, name)?;
        }

        for (index, row) in table.rows().iter().enumerate() {
            let row_num = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col, field) in row.iter().enumerate() {
                if let Some(cell) = field.to_cell() {
                    write_cell(worksheet, row_num, column(col)?, &cell)?;
                }
            }
        }

        workbook.save(path)?;
        debug!(
            "Wrote {} rows to sheet {:?} in {}",
            table.rows().len(),
            table.sheet_name(),
            path.display()
        );
        Ok(())
    }
}

fn column(index: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> std::result::Result<(), XlsxError> {
    match cell {
        CellValue::Text(s) => worksheet.write_string(row, col, fit_cell_text(s, row, col))?,
        CellValue::Int(i) if i.unsigned_abs() > MAX_EXACT_INT => {
            worksheet.write_string(row, col, i.to_string())?
        }
        CellValue::Int(i) => worksheet.write_number(row, col, *i as f64)?,
        CellValue::Float(x) => worksheet.write_number(row, col, *x)?,
    };
    Ok(())
}

/// Cuts text to the cell limit on a char boundary
fn fit_cell_text(s: &str, row: u32, col: u16) -> &str {
    match s.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => {
            warn!(
                "Cell at row {} column {} exceeds {} characters, truncating",
                row, col, MAX_CELL_CHARS
            );
            &s[..end]
        }
        None => s,
    }
}
