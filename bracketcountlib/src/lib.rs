//! # bracketcountlib
//!
//! Counts opening brackets in every file under a source tree and renders a
//! plain-text summary report, meant to run as a step of a larger build.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//!
//! - **source**: walk the scan root and yield regular files in relative-path order
//! - **data**: count `(`, `[`, `{` and `<` per file and fold the tallies into a `FileReport`
//! - **output**: render the report text and write it to its destination
//!
//! This is not a parser. A bracket inside a string literal or a comment
//! counts the same as any other, and closing brackets are not tracked.
//! Content is read as a byte stream and only ASCII bytes are counted, so
//! invalid UTF-8 never fails a run.
//!
//! ## Example
//!
//! ```rust
//! use bracketcountlib::{count_tree, render, run, ReportConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let src = dir.path().join("src");
//! fs::create_dir(&src).unwrap();
//! fs::write(src.join("Main.java"), "class Main { void run(int[] xs) {} }").unwrap();
//!
//! // Count and render without touching the disk
//! let report = count_tree(&src).unwrap();
//! assert_eq!(report.grand_total().curly, 2);
//! assert!(render(&report).contains("Total brackets: 4\n"));
//!
//! // Or do the whole build step
//! let destination = ReportConfig::new().output_path(dir.path().join("build"));
//! let summary = run(&src, &destination).unwrap();
//! assert_eq!(summary.file_count, 1);
//! assert!(destination.exists());
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;
pub mod task;

pub use data::{
    count_file, count_reader, count_str, count_tree, count_tree_excluding, BracketKind,
    BracketTally, FileEntry, FileReport,
};
pub use error::BracketError;
pub use options::{ReportConfig, DEFAULT_OUTPUT_FILE_NAME};
pub use output::{render, write_report, ReportText};
pub use source::{scan, Scan, SourceFile};
pub use task::{generate_report, run, ReportSummary};

/// Result type for bracketcountlib operations
pub type Result<T> = std::result::Result<T, BracketError>;
