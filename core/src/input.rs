//! Expansion of command-line paths into the list of files to decode

use crate::error::{BatchError, Result};
use crate::types::ErrorPolicy;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Turns user-supplied paths into an ordered candidate file list
///
/// # Example
///
/// ```no_run
/// use dicombatch_core::{ErrorPolicy, InputExpander};
///
/// let expander = InputExpander::new(true, ".dcm");
/// let files = expander.expand(&["scans".into()], ErrorPolicy::Continue).unwrap();
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputExpander {
    recursive: bool,
    suffix: String,
}

impl InputExpander {
    /// Creates an expander
    ///
    /// The suffix is matched case-insensitively against each file's own
    /// name. An empty suffix matches every file.
    pub fn new(recursive: bool, suffix: &str) -> Self {
        Self {
            recursive,
            suffix: suffix.to_lowercase(),
        }
    }

    /// Expands the inputs in order
    ///
    /// Missing paths and traversal errors go through `policy`. Directories
    /// are skipped unless recursion is enabled.
    pub fn expand(&self, inputs: &[PathBuf], policy: ErrorPolicy) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in inputs {
            let metadata = match fs::metadata(input) {
                Ok(metadata) => metadata,
                Err(source) => {
                    policy.handle(BatchError::InputAccess {
                        path: input.clone(),
                        source,
                    })?;
                    continue;
                }
            };

            if !metadata.is_dir() {
                if self.matches_suffix(input) {
                    files.push(input.clone());
                }
            } else if !self.recursive {
                debug!("Skipping directory {} (not recursive)", input.display());
            } else {
                self.walk(input, policy, &mut files)?;
            }
        }

        info!("Found {} candidate files", files.len());
        Ok(files)
    }

    fn walk(&self, root: &Path, policy: ErrorPolicy, files: &mut Vec<PathBuf>) -> Result<()> {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    policy.handle(BatchError::Walk(e))?;
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            if self.matches_suffix(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(())
    }

    /// Checks a path's file name against the suffix filter
    pub fn matches_suffix(&self, path: &Path) -> bool {
        if self.suffix.is_empty() {
            return true;
        }
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase().ends_with(&self.suffix))
            .unwrap_or(false)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;
    use tempfile::TempDir;

    /// root/
    ///   a.dcm
    ///   b.DCM
    ///   notes.txt
    ///   .hidden.dcm
    ///   sub/
    ///     c.dcm
    ///     deeper/d.dcm
    ///   .cache/e.dcm
    fn make_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();
        for file in [
            "a.dcm",
            "b.DCM",
            "notes.txt",
            ".hidden.dcm",
            "sub/c.dcm",
            "sub/deeper/d.dcm",
            ".cache/e.dcm",
        ] {
            File::create(root.join(file)).unwrap();
        }
        dir
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_directory_skipped_without_recursion() {
        let dir = make_tree();
        let files = InputExpander::new(false, "")
            .expand(&[dir.path().to_path_buf()], ErrorPolicy::StopOnError)
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_recursive_walk_with_suffix() {
        let dir = make_tree();
        let files = InputExpander::new(true, ".dcm")
            .expand(&[dir.path().to_path_buf()], ErrorPolicy::StopOnError)
            .unwrap();
        assert_eq!(names(&files), vec!["a.dcm", "b.DCM", "c.dcm", "d.dcm"]);
        assert_eq!(files[2], dir.path().join("sub").join("c.dcm"));
    }

    #[test]
    fn test_recursive_walk_without_suffix() {
        let dir = make_tree();
        let files = InputExpander::new(true, "")
            .expand(&[dir.path().to_path_buf()], ErrorPolicy::StopOnError)
            .unwrap();
        assert_eq!(names(&files), vec!["a.dcm", "b.DCM", "notes.txt", "c.dcm", "d.dcm"]);
    }

    #[test]
    fn test_hidden_directory_not_descended() {
        let dir = make_tree();
        let files = InputExpander::new(true, "")
            .expand(&[dir.path().to_path_buf()], ErrorPolicy::StopOnError)
            .unwrap();
        assert!(!files.contains(&dir.path().join(".cache").join("e.dcm")));
        assert!(!files.contains(&dir.path().join(".hidden.dcm")));
    }

    #[test]
    fn test_hidden_root_still_walked() {
        let dir = tempfile::Builder::new().prefix(".scans").tempdir().unwrap();
        File::create(dir.path().join("a.dcm")).unwrap();

        let files = InputExpander::new(true, ".dcm")
            .expand(&[dir.path().to_path_buf()], ErrorPolicy::StopOnError)
            .unwrap();
        assert_eq!(files, vec![dir.path().join("a.dcm")]);
    }

    #[rstest]
    #[case(ErrorPolicy::Continue, true)]
    #[case(ErrorPolicy::StopOnError, false)]
    fn test_walk_error_follows_policy(#[case] policy: ErrorPolicy, #[case] ok: bool) {
        let dir = make_tree();
        let gone = dir.path().join("vanished");
        let mut files = vec![dir.path().join("a.dcm")];

        let result = InputExpander::new(true, "").walk(&gone, policy, &mut files);
        if ok {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(BatchError::Walk(_))));
        }
        assert_eq!(files, vec![dir.path().join("a.dcm")]);
    }

    #[rstest]
    #[case("a.dcm", ".dcm", true)]
    #[case("b.DCM", ".dcm", true)]
    #[case("notes.txt", ".dcm", false)]
    #[case("notes.txt", "", true)]
    fn test_explicit_file_filtered(#[case] file: &str, #[case] suffix: &str, #[case] kept: bool) {
        let dir = make_tree();
        let path = dir.path().join(file);
        let files = InputExpander::new(false, suffix)
            .expand(&[path.clone()], ErrorPolicy::StopOnError)
            .unwrap();
        assert_eq!(files == vec![path], kept);
    }

    #[test]
    fn test_explicit_order_preserved() {
        let dir = make_tree();
        let inputs = vec![
            dir.path().join("sub/c.dcm"),
            dir.path().join("a.dcm"),
            dir.path().join("a.dcm"),
        ];
        let files = InputExpander::new(false, "")
            .expand(&inputs, ErrorPolicy::StopOnError)
            .unwrap();
        assert_eq!(files, inputs);
    }

    #[test]
    fn test_missing_path_continue() {
        let dir = make_tree();
        let inputs = vec![dir.path().join("missing.dcm"), dir.path().join("a.dcm")];
        let files = InputExpander::new(false, "")
            .expand(&inputs, ErrorPolicy::Continue)
            .unwrap();
        assert_eq!(files, vec![dir.path().join("a.dcm")]);
    }

    #[test]
    fn test_missing_path_stop() {
        let dir = make_tree();
        let inputs = vec![dir.path().join("missing.dcm"), dir.path().join("a.dcm")];
        let result = InputExpander::new(false, "").expand(&inputs, ErrorPolicy::StopOnError);
        assert!(matches!(result, Err(BatchError::InputAccess { .. })));
    }
}
