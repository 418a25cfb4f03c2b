//! Error types for bracketcountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting brackets or writing the report
#[derive(Error, Debug)]
pub enum BracketError {
    /// The scan root does not exist
    #[error("scan root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Failed to read a file (or a directory entry) under the scan root
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Two scanned files mapped to the same report key
    #[error("duplicate report entry for '{0}'")]
    DuplicateFile(String),

    /// Failed to create or write the report destination
    #[error("failed to write report to '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration '{path}': {message}")]
    Config { path: PathBuf, message: String },
}
