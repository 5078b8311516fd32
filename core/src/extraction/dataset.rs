use crate::error::{BatchError, Result};
use crate::types::{FieldValue, ResultRow};
use dicom_object::InMemDicomObject;

use super::registry::TagSpec;
use super::tags::find_nested;
use super::value::field_value;

/// Builds one result row from a decoded dataset
///
/// Every requested tag yields exactly one cell, in request order. A tag that
/// is absent at every depth yields [`FieldValue::Empty`] and is not an error.
///
/// # Errors
///
/// Returns [`BatchError::ExtractionError`] if an element lookup fails for a
/// reason other than absence.
pub fn extract_row(dcm: &InMemDicomObject, spec: &TagSpec) -> Result<ResultRow> {
    spec.iter()
        .map(|(name, tag)| -> Result<FieldValue> {
            let found = find_nested(dcm, tag).map_err(|e| BatchError::ExtractionError {
                name: name.to_string(),
                message: e.to_string(),
            })?;
            Ok(found.map(field_value).unwrap_or(FieldValue::Empty))
        })
        .collect()
}
