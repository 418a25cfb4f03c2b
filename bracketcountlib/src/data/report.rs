//! Aggregation of per-file tallies into a report.
//!
//! A [`FileReport`] is built once per run by folding over the scan sequence,
//! then handed to the renderer. Nothing is carried over between runs.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::BracketError;
use crate::source::{scan, Scan, SourceFile};
use crate::Result;

use super::counter::count_file;
use super::tally::BracketTally;

/// Tally for a single file, keyed by its path relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub tally: BracketTally,
}

/// Ordered mapping of file name to tally.
///
/// Iteration order is insertion order, which for [`count_tree`] is the
/// scanner's relative-path order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    entries: Vec<FileEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FileReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file's tally.
    ///
    /// A repeated name replaces the earlier tally in place and returns it,
    /// like [`HashMap::insert`].
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        tally: BracketTally,
    ) -> Option<BracketTally> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].tally, tally)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(FileEntry { name, tally });
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, tally: BracketTally) -> Self {
        self.insert(name, tally);
        self
    }

    pub fn get(&self, name: &str) -> Option<&BracketTally> {
        self.index.get(name).map(|&i| &self.entries[i].tally)
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-kind sum over every file, derived fresh on each call.
    pub fn grand_total(&self) -> BracketTally {
        self.entries.iter().map(|e| e.tally).sum()
    }
}

/// Count one scanned file and add it to the report.
///
/// Two files with the same key are an error; neither tally is dropped.
fn fold_file(mut report: FileReport, file: Result<SourceFile>) -> Result<FileReport> {
    let file = file?;
    let tally = count_file(&file.path)?;
    debug!(file = %file.path.display(), brackets = tally.total(), "counted");

    let key = file.key();
    if report.get(&key).is_some() {
        return Err(BracketError::DuplicateFile(key));
    }
    report.insert(key, tally);
    Ok(report)
}

fn fold_scan(mut files: Scan) -> Result<FileReport> {
    files.try_fold(FileReport::new(), fold_file)
}

/// Scan `root` and count every file beneath it.
///
/// Fails fast: the first unreadable file aborts the whole run.
///
/// ```rust
/// use bracketcountlib::count_tree;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.json"), "{\"x\": [1]}").unwrap();
/// fs::write(dir.path().join("b.txt"), "plain").unwrap();
///
/// let report = count_tree(dir.path()).unwrap();
/// assert_eq!(report.file_count(), 2);
/// assert_eq!(report.grand_total().total(), 2);
/// ```
pub fn count_tree(root: impl AsRef<Path>) -> Result<FileReport> {
    fold_scan(scan(root)?)
}

/// [`count_tree`], leaving out `excluded` if it sits under `root`.
///
/// A report written inside the tree it describes is skipped this way, so
/// re-running over an unchanged tree gives the same result.
pub fn count_tree_excluding(
    root: impl AsRef<Path>,
    excluded: impl AsRef<Path>,
) -> Result<FileReport> {
    fold_scan(scan(root)?.exclude(excluded))
}
