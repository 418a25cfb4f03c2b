//! High-level entry points used by a build step.
//!
//! A host build calls [`run`] with its source root and report destination.
//! [`generate_report`] is the same pipeline without the write, for callers
//! that want the text itself.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::data::{count_tree, count_tree_excluding, BracketTally};
use crate::output::{render, write_report};
use crate::Result;

/// What a completed [`run`] produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Where the report was written
    pub destination: PathBuf,
    /// Number of files counted
    pub file_count: usize,
    /// Grand totals across all files
    pub total: BracketTally,
    /// The rendered report
    #[serde(skip)]
    pub text: String,
}

/// Scan `root` and return the rendered report text.
///
/// ```rust
/// use bracketcountlib::generate_report;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let text = generate_report(dir.path()).unwrap();
/// assert!(text.ends_with("Total brackets: 0\n"));
/// ```
pub fn generate_report(root: impl AsRef<Path>) -> Result<String> {
    Ok(render(&count_tree(root)?))
}

/// Scan `root`, render the report, and write it to `destination`.
///
/// Nothing is written unless every file was counted, so a failed run leaves
/// any previous report untouched. When `destination` lies under `root`, the
/// previous report is not counted as a source file.
pub fn run(root: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<ReportSummary> {
    let root = root.as_ref();
    let destination = destination.as_ref();

    let report = count_tree_excluding(root, destination)?;
    let text = render(&report);
    write_report(&text, destination)?;

    let total = report.grand_total();
    info!(
        root = %root.display(),
        files = report.file_count(),
        brackets = total.total(),
        "bracket count complete"
    );

    Ok(ReportSummary {
        destination: destination.to_path_buf(),
        file_count: report.file_count(),
        total,
        text,
    })
}
