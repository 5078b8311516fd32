use dicom_core::Tag;
use dicom_object::mem::InMemElement;
use dicom_object::{AccessError, InMemDicomObject};

/// Finds an element anywhere in a DICOM object
///
/// The top level is searched first. When the tag is not there, the items of
/// every sequence element are searched depth-first, in element order, and
/// the first match wins.
///
/// Returns `Ok(None)` if the tag is not present at any depth.
pub fn find_nested(dcm: &InMemDicomObject, tag: Tag) -> Result<Option<&InMemElement>, AccessError> {
    if let Some(elem) = dcm.element_opt(tag)? {
        return Ok(Some(elem));
    }

    for elem in dcm.iter() {
        if let Some(items) = elem.items() {
            for item in items {
                if let Some(found) = find_nested(item, tag)? {
                    return Ok(Some(found));
                }
            }
        }
    }

    Ok(None)
}

/// Trims DICOM value padding (spaces and NUL bytes)
pub fn trim_padding(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\0')
}
