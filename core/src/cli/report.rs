use crate::api::BatchSummary;
use std::fmt;

/// Text report formatter for a finished run
pub struct TextReport<'a> {
    summary: &'a BatchSummary,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a BatchSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch Extraction")?;
        writeln!(f, "================")?;
        writeln!(f)?;
        writeln!(f, "Candidates:     {}", self.summary.candidates)?;
        writeln!(f, "Rows written:   {}", self.summary.rows_written)?;
        writeln!(f, "Duplicates:     {}", self.summary.duplicates_skipped)?;
        writeln!(f, "Failures:       {}", self.summary.failures)?;
        writeln!(f, "Series:         {}", self.summary.series_seen)?;
        writeln!(f, "Output:         {}", self.summary.output.display())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_text_report_format() {
        let summary = BatchSummary {
            candidates: 4,
            rows_written: 2,
            duplicates_skipped: 1,
            failures: 1,
            series_seen: 2,
            output: PathBuf::from("dicom-batch.xlsx"),
        };

        let report = TextReport::new(&summary);
        let output = format!("{}", report);

        assert!(output.contains("Batch Extraction"));
        assert!(output.contains("Candidates:     4"));
        assert!(output.contains("Rows written:   2"));
        assert!(output.contains("Duplicates:     1"));
        assert!(output.contains("Failures:       1"));
        assert!(output.contains("Output:         dicom-batch.xlsx"));
    }
}
