//! Series-level row selection
//!
//! Decides which decoded datasets produce a row when only one file per
//! imaging series is wanted.

mod series;

pub use series::{series_key, SeriesDecision, SeriesDeduplicator};
