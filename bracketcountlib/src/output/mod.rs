//! Output: render the report text and persist it.
//!
//! This module handles the final stage of the pipeline. Rendering is a pure
//! function over a finished [`FileReport`](crate::data::FileReport); writing
//! is a separate step so callers can inspect or print the text first.

pub mod report;

pub use report::{render, write_report, ReportText, REPORT_TITLE, RULE};
