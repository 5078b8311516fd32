pub mod report;

use crate::types::{BatchConfig, DEFAULT_OUTPUT_FILE, DEFAULT_TAG_LIST};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dicombatch
#[derive(Parser, Debug)]
#[command(name = "dicombatch")]
#[command(about = "Extracts tag data from any number of DICOM files to an XLSX file")]
#[command(version)]
pub struct Cli {
    /// DICOM files, or directories together with --recursive
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Name of the file to write results to
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Consider only one file per series
    #[arg(short = '1', long)]
    pub one_per_series: bool,

    /// Recurse into directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Stop when encountering an error, rather than skipping the file
    #[arg(short, long)]
    pub stop_on_error: bool,

    /// Comma separated list of DICOM tag keywords; spaces are stripped
    #[arg(short, long, value_name = "LIST", default_value = DEFAULT_TAG_LIST)]
    pub tags: String,

    /// Only consider files whose name ends with this suffix (case-insensitive)
    #[arg(short = 'x', long, default_value = "")]
    pub suffix: String,

    /// Run summary format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

impl Cli {
    /// Builds the run configuration from the parsed arguments
    pub fn to_config(&self) -> BatchConfig {
        BatchConfig::default()
            .with_inputs(self.paths.clone())
            .with_output(self.output.clone())
            .with_tag_list(self.tags.clone())
            .with_suffix(self.suffix.clone())
            .one_per_series(self.one_per_series)
            .recursive(self.recursive)
            .stop_on_error(self.stop_on_error)
    }
}
