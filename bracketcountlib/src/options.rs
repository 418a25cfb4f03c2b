//! Configuration for where the report is written.
//!
//! The only recognised option is the report file name. It is resolved
//! against a build output directory chosen by the caller.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BracketError;
use crate::Result;

/// File name used when none is configured.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "brackets_count.txt";

/// Report configuration.
///
/// Deserialises from JSON such as `{"outputFileName": "brackets.txt"}`.
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Report file name, relative to the build output directory
    pub output_file_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }
}

impl ReportConfig {
    /// Create a config with the default file name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report file name.
    pub fn output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_err = |message: String| BracketError::Config {
            path: path.to_path_buf(),
            message,
        };

        let text = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        let config: Self = serde_json::from_str(&text).map_err(|e| config_err(e.to_string()))?;

        if config.output_file_name.trim().is_empty() {
            return Err(config_err("outputFileName must not be empty".to_string()));
        }

        Ok(config)
    }

    /// Where the report goes inside `build_dir`.
    pub fn output_path(&self, build_dir: impl AsRef<Path>) -> PathBuf {
        build_dir.as_ref().join(&self.output_file_name)
    }
}
