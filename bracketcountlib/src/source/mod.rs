//! Source discovery: find the files to count.
//!
//! This module handles the first stage of the pipeline: walking the scan
//! root and yielding every regular file beneath it, lazily and in a stable
//! order.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bracketcountlib::source::scan;
//!
//! for file in scan("src")? {
//!     println!("{}", file?.key());
//! }
//! ```

pub mod scanner;

pub use scanner::{scan, Scan, SourceFile};
