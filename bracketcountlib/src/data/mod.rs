//! Data collection: count files and aggregate the results.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Tallies**: `BracketTally` and `BracketKind`
//! - **Counting**: single-pass counting of a string, reader, or file
//! - **Aggregation**: `FileReport`, folded from the scan sequence
//!
//! ## Example
//!
//! ```rust,ignore
//! use bracketcountlib::data::count_tree;
//!
//! let report = count_tree("src")?;
//! println!("Total brackets: {}", report.grand_total().total());
//! ```

pub mod counter;
pub mod report;
pub mod tally;

pub use counter::{count_file, count_reader, count_str};
pub use report::{count_tree, count_tree_excluding, FileEntry, FileReport};
pub use tally::{BracketKind, BracketTally};
