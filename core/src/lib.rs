pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod input;
pub mod output;
pub mod selection;
pub mod types;

pub use api::{BatchExtractor, BatchSummary};
pub use cli::report::TextReport;
pub use error::{BatchError, Result};
pub use extraction::{TagRegistry, TagSpec};
pub use input::InputExpander;
pub use output::{OutputTable, SheetEncoder, XlsxEncoder};
pub use selection::{SeriesDecision, SeriesDeduplicator};
pub use types::*;
