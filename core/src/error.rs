use std::path::PathBuf;
use thiserror::Error;

/// Result type for batch extraction operations
pub type Result<T> = std::result::Result<T, BatchError>;

/// Error types for batch extraction operations
#[derive(Error, Debug)]
pub enum BatchError {
    /// Tag name not present in the data dictionary
    #[error("unknown tag name in tag list: {0:?}")]
    UnknownTag(String),

    /// Input path could not be inspected
    #[error("cannot access input {}: {}", .path.display(), .source)]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed part way
    #[error("error when recursing into directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// SeriesInstanceUID missing or not a single string value
    #[error("series instance UID {0}")]
    SeriesKey(String),

    /// Element lookup failed for a reason other than absence
    #[error("error in finding element {name}: {message}")]
    ExtractionError { name: String, message: String },

    /// Row width does not match the header
    #[error("row has {actual} cells but the header has {expected}")]
    RowWidth { expected: usize, actual: usize },

    /// Spreadsheet encoding error
    #[error("error in writing output file: {0}")]
    Output(#[from] rust_xlsxwriter::XlsxError),

    /// Failure while processing one candidate file
    #[error("error when parsing dicom file {}: {}", .path.display(), .source)]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<BatchError>,
    },

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BatchError {
    /// Attaches the path of the file being processed
    pub fn in_file(path: impl Into<PathBuf>, source: BatchError) -> Self {
        BatchError::InFile {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for BatchError {
    fn from(e: dicom_object::ReadError) -> Self {
        BatchError::DicomError(format!("{}", e))
    }
}
