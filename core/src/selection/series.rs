use crate::error::{BatchError, Result};
use crate::extraction::tags::trim_padding;
use dicom_core::PrimitiveValue;
use dicom_dictionary_std::tags::SERIES_INSTANCE_UID;
use dicom_object::InMemDicomObject;
use std::collections::HashSet;

/// Outcome of consulting the series deduplicator for one dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesDecision {
    /// Extract a row for this dataset
    Process,
    /// Series already produced a row
    Skip,
}

/// Tracks the series seen during a run
///
/// Every consulted dataset records its SeriesInstanceUID. Only in
/// one-per-series mode does membership suppress a row; otherwise the set is
/// maintained for inspection only.
#[derive(Debug, Clone, Default)]
pub struct SeriesDeduplicator {
    one_per_series: bool,
    seen: HashSet<String>,
}

impl SeriesDeduplicator {
    /// Creates a deduplicator with an empty seen-set
    pub fn new(one_per_series: bool) -> Self {
        Self {
            one_per_series,
            seen: HashSet::new(),
        }
    }

    /// Decides whether a dataset should produce a row
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::SeriesKey`] if the dataset has no
    /// SeriesInstanceUID or it is not a single string value.
    pub fn should_process(&mut self, dcm: &InMemDicomObject) -> Result<SeriesDecision> {
        let key = series_key(dcm)?;
        Ok(self.observe(key))
    }

    /// Records a series key and returns the decision for it
    pub fn observe(&mut self, key: String) -> SeriesDecision {
        let first_seen = self.seen.insert(key);
        if self.one_per_series && !first_seen {
            SeriesDecision::Skip
        } else {
            SeriesDecision::Process
        }
    }

    pub fn is_one_per_series(&self) -> bool {
        self.one_per_series
    }

    /// Series keys observed so far
    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Reads the SeriesInstanceUID of a dataset
pub fn series_key(dcm: &InMemDicomObject) -> Result<String> {
    let elem = dcm
        .element_opt(SERIES_INSTANCE_UID)
        .map_err(|e| BatchError::SeriesKey(e.to_string()))?
        .ok_or_else(|| BatchError::SeriesKey("not found".to_string()))?;

    let uid = match elem.value().primitive() {
        Some(PrimitiveValue::Str(s)) => trim_padding(s),
        Some(PrimitiveValue::Strs(strs)) if strs.len() == 1 => trim_padding(&strs[0]),
        _ => {
            return Err(BatchError::SeriesKey(
                "is not a single string value".to_string(),
            ))
        }
    };

    if uid.is_empty() {
        return Err(BatchError::SeriesKey("is empty".to_string()));
    }

    Ok(uid.to_string())
}
