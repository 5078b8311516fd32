//! Resolution of DICOM keywords into tags
//!
//! A tag list is resolved completely before any file is opened, so that a
//! typo in one keyword fails the run up front.

use crate::error::{BatchError, Result};
use dicom_core::{DataDictionary, Tag};
use dicom_dictionary_std::StandardDataDictionary;

/// Lookup of field names in a data dictionary
pub trait TagRegistry {
    /// Returns the tag for a field name, or `None` if the name is unknown
    fn resolve(&self, name: &str) -> Option<Tag>;
}

/// Keywords only; numeric forms such as `(0010,0020)` are not names
impl TagRegistry for StandardDataDictionary {
    fn resolve(&self, name: &str) -> Option<Tag> {
        self.by_name(name).map(|entry| entry.tag.inner())
    }
}

/// Ordered list of requested fields
///
/// Defines both the header row and the extraction order of every row.
///
/// # Example
///
/// ```
/// use dicombatch_core::TagSpec;
/// use dicom_core::Tag;
///
/// let spec = TagSpec::parse(" PatientID ,StudyDescription").unwrap();
/// assert_eq!(spec.names(), &["PatientID", "StudyDescription"]);
/// assert_eq!(spec.tags()[0], Tag(0x0010, 0x0020));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TagSpec {
    names: Vec<String>,
    tags: Vec<Tag>,
}

impl TagSpec {
    /// Parses a comma separated keyword list against the standard dictionary
    pub fn parse(tag_list: &str) -> Result<Self> {
        Self::parse_with(tag_list, &StandardDataDictionary)
    }

    /// Parses a comma separated keyword list against the given registry
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::UnknownTag`] for the first name the registry
    /// cannot resolve.
    pub fn parse_with<R: TagRegistry>(tag_list: &str, registry: &R) -> Result<Self> {
        let names: Vec<String> = tag_list
            .split(',')
            .map(|name| name.trim().to_string())
            .collect();

        let tags = names
            .iter()
            .map(|name| {
                registry
                    .resolve(name)
                    .ok_or_else(|| BatchError::UnknownTag(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { names, tags })
    }

    /// Trimmed field names, used as column headers
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Resolved tags, parallel to [`TagSpec::names`]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Iterates over (name, tag) pairs in request order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Tag)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.tags.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
