use crate::error::{BatchError, Result};
use crate::extraction::{extract_row, TagSpec};
use crate::input::InputExpander;
use crate::output::{OutputTable, SheetEncoder, XlsxEncoder};
use crate::selection::{SeriesDecision, SeriesDeduplicator};
use crate::types::{BatchConfig, ErrorPolicy};
use dicom_object::{open_file, DefaultDicomObject};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Batch driver: extracts one spreadsheet row per processed DICOM file
///
/// A run is a single pass over the candidate file list. Construction
/// resolves the tag list and writes the header, so an unknown tag name fails
/// before any file is touched. [`BatchExtractor::run`] consumes the
/// extractor, so a run cannot be repeated or resumed.
///
/// # Example
///
/// ```no_run
/// use dicombatch_core::{BatchConfig, BatchExtractor};
///
/// let config = BatchConfig::default()
///     .with_inputs(vec!["scans".into()])
///     .recursive(true)
///     .one_per_series(true)
///     .with_output("series.xlsx");
///
/// let summary = BatchExtractor::new(&config)?.run()?;
/// println!("{} rows written", summary.rows_written);
/// # Ok::<(), dicombatch_core::BatchError>(())
/// ```
pub struct BatchExtractor {
    spec: TagSpec,
    inputs: Vec<PathBuf>,
    output: PathBuf,
    expander: InputExpander,
    policy: ErrorPolicy,
    series: SeriesDeduplicator,
    table: OutputTable,
    encoder: Box<dyn SheetEncoder>,
}

impl BatchExtractor {
    /// Creates an extractor from a run configuration
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::UnknownTag`] if any tag name cannot be resolved.
    pub fn new(config: &BatchConfig) -> Result<Self> {
        let spec = TagSpec::parse(&config.tag_list)?;
        Ok(Self::with_spec(config, spec))
    }

    /// Creates an extractor with an already resolved tag list
    pub fn with_spec(config: &BatchConfig, spec: TagSpec) -> Self {
        let table = OutputTable::new(spec.names().to_vec());
        Self {
            spec,
            inputs: config.inputs.clone(),
            output: config.output.clone(),
            expander: InputExpander::new(config.recursive, &config.suffix),
            policy: ErrorPolicy::from_stop_flag(config.stop_on_error),
            series: SeriesDeduplicator::new(config.one_per_series),
            table,
            encoder: Box::new(XlsxEncoder),
        }
    }

    /// Replaces the spreadsheet encoder
    pub fn with_encoder(mut self, encoder: Box<dyn SheetEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Replaces the series deduplicator
    pub fn with_deduplicator(mut self, series: SeriesDeduplicator) -> Self {
        self.series = series;
        self
    }

    /// Replaces the failure policy
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn spec(&self) -> &TagSpec {
        &self.spec
    }

    pub fn table(&self) -> &OutputTable {
        &self.table
    }

    /// Runs the batch to completion
    ///
    /// Per-input errors go through the failure policy. The output file is
    /// written exactly once, after every candidate has been handled, and a
    /// failure to write it is always fatal.
    pub fn run(mut self) -> Result<BatchSummary> {
        let files = self.expander.expand(&self.inputs, self.policy)?;

        let mut summary = BatchSummary {
            candidates: files.len(),
            output: self.output.clone(),
            ..Default::default()
        };

        for path in &files {
            match self.process_file(path) {
                Ok(FileOutcome::Written(row)) => {
                    info!("Processed: {} (row {})", path.display(), row);
                    summary.rows_written += 1;
                }
                Ok(FileOutcome::DuplicateSeries) => {
                    debug!("Skipping {}: series already processed", path.display());
                    summary.duplicates_skipped += 1;
                }
                Err(e) => {
                    self.policy.handle(BatchError::in_file(path, e))?;
                    summary.failures += 1;
                }
            }
        }

        summary.series_seen = self.series.len();

        self.table.flush_with(&self.output, self.encoder.as_ref())?;
        info!(
            "Wrote {} rows to {}",
            summary.rows_written,
            self.output.display()
        );

        Ok(summary)
    }

    /// Decodes, deduplicates and extracts one file
    fn process_file(&mut self, path: &Path) -> Result<FileOutcome> {
        let dcm = decode(path)?;

        if self.series.should_process(&dcm)? == SeriesDecision::Skip {
            return Ok(FileOutcome::DuplicateSeries);
        }

        let row = extract_row(&dcm, &self.spec)?;
        let index = self.table.append_row(row)?;
        Ok(FileOutcome::Written(index))
    }
}

/// Opens and parses a DICOM file
pub fn decode(path: &Path) -> Result<DefaultDicomObject> {
    Ok(open_file(path)?)
}

/// What happened to a single candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    Written(usize),
    DuplicateSeries,
}

/// Counts collected over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct BatchSummary {
    /// Files found by input expansion
    pub candidates: usize,

    /// Data rows written to the output table
    pub rows_written: usize,

    /// Files skipped because their series already produced a row
    pub duplicates_skipped: usize,

    /// Files that failed and were skipped
    pub failures: usize,

    /// Distinct series encountered
    pub series_seen: usize,

    /// Spreadsheet written by the run
    pub output: PathBuf,
}
