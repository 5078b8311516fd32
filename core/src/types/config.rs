use std::path::PathBuf;

/// Default name of the spreadsheet written at the end of a run
pub const DEFAULT_OUTPUT_FILE: &str = "dicom-batch.xlsx";

/// Default comma separated tag list
pub const DEFAULT_TAG_LIST: &str = "PatientID, StudyDescription";

/// Configuration for a batch extraction run
///
/// # Example
///
/// ```
/// use dicombatch_core::BatchConfig;
///
/// let config = BatchConfig::default()
///     .with_inputs(vec!["scans".into()])
///     .recursive(true)
///     .one_per_series(true);
///
/// assert!(config.recursive);
/// assert!(config.one_per_series);
/// assert!(!config.stop_on_error);
/// assert_eq!(config.tag_list, "PatientID, StudyDescription");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Files or directories to process
    pub inputs: Vec<PathBuf>,

    /// Destination spreadsheet
    pub output: PathBuf,

    /// Emit only the first file of each series
    pub one_per_series: bool,

    /// Descend into directory inputs
    pub recursive: bool,

    /// Abort the run on the first per-input error
    pub stop_on_error: bool,

    /// Comma separated list of DICOM keywords
    pub tag_list: String,

    /// Case-insensitive file name suffix; empty matches every file
    pub suffix: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            one_per_series: false,
            recursive: false,
            stop_on_error: false,
            tag_list: DEFAULT_TAG_LIST.to_string(),
            suffix: String::new(),
        }
    }
}

impl BatchConfig {
    /// Builder: Set input paths
    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Builder: Set output path
    ///
    /// # Example
    ///
    /// ```
    /// use dicombatch_core::BatchConfig;
    ///
    /// let config = BatchConfig::default().with_output("out.xlsx");
    /// assert_eq!(config.output.to_str(), Some("out.xlsx"));
    /// ```
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Builder: Set tag list
    pub fn with_tag_list(mut self, tag_list: impl Into<String>) -> Self {
        self.tag_list = tag_list.into();
        self
    }

    /// Builder: Set file name suffix filter
    ///
    /// # Example
    ///
    /// ```
    /// use dicombatch_core::BatchConfig;
    ///
    /// let config = BatchConfig::default().with_suffix(".dcm");
    /// assert_eq!(config.suffix, ".dcm");
    /// ```
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Builder: Keep one file per series
    pub fn one_per_series(mut self, enabled: bool) -> Self {
        self.one_per_series = enabled;
        self
    }

    /// Builder: Recurse into directories
    pub fn recursive(mut self, enabled: bool) -> Self {
        self.recursive = enabled;
        self
    }

    /// Builder: Stop on the first per-input error
    pub fn stop_on_error(mut self, enabled: bool) -> Self {
        self.stop_on_error = enabled;
        self
    }
}
