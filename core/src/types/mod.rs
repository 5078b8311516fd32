//! Core type definitions for batch extraction
//!
//! - [`FieldValue`] and [`CellValue`]: decoded field values and their cells
//! - [`BatchConfig`]: configuration of one run
//! - [`ErrorPolicy`]: stop-or-continue handling of per-input failures

mod config;
mod policy;
mod value;

pub use config::{BatchConfig, DEFAULT_OUTPUT_FILE, DEFAULT_TAG_LIST};
pub use policy::ErrorPolicy;
pub use value::{CellValue, FieldValue, ResultRow, MULTI_VALUE_DELIMITER};
