//! In-memory result table and its spreadsheet serialization

mod table;
mod xlsx;

pub use table::{OutputTable, RESULTS_SHEET};
pub use xlsx::{SheetEncoder, XlsxEncoder};
