//! Lazy, deterministic discovery of the files under a scan root.
//!
//! Traversal is depth-first with entries sorted by file name at every
//! level, so files come out in relative-path order. Symbolic links are not
//! followed (a link is neither counted nor descended into), and hidden files
//! and directories are included like any other entry.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::BracketError;
use crate::Result;

/// A regular file found under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative: PathBuf,
}

impl SourceFile {
    /// Report key for this file: the relative path with `/` separators.
    ///
    /// Distinct paths always get distinct keys. A backslash is written as
    /// `\\` and each byte that is not valid UTF-8 as `\xNN`.
    pub fn key(&self) -> String {
        let mut key = String::new();
        for (i, component) in self.relative.components().enumerate() {
            if i > 0 {
                key.push('/');
            }
            push_escaped(&mut key, component.as_os_str());
        }
        key
    }
}

fn push_escaped(key: &mut String, name: &OsStr) {
    for chunk in name.as_encoded_bytes().utf8_chunks() {
        for c in chunk.valid().chars() {
            if c == '\\' {
                key.push_str("\\\\");
            } else {
                key.push(c);
            }
        }
        for byte in chunk.invalid() {
            key.push_str(&format!("\\x{byte:02x}"));
        }
    }
}

/// Iterator over the regular files under a scan root.
///
/// Created by [`scan`]. Each call to `scan` starts a fresh walk.
pub struct Scan {
    root: PathBuf,
    walker: walkdir::IntoIter,
    excluded: Vec<PathBuf>,
}

impl Iterator for Scan {
    type Item = Result<SourceFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(self.walk_error(err))),
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.into_path();
            let relative = match path.strip_prefix(&self.root) {
                Ok(rel) if self.excluded.iter().any(|e| e == rel) => {
                    debug!(file = %path.display(), "skipping excluded file");
                    continue;
                }
                // Root itself is a file
                Ok(rel) if rel.as_os_str().is_empty() => {
                    PathBuf::from(path.file_name().unwrap_or(path.as_os_str()))
                }
                Ok(rel) => rel.to_path_buf(),
                Err(_) => path.clone(),
            };

            return Some(Ok(SourceFile { path, relative }));
        }
    }
}

impl Scan {
    /// Leave `path` out of the walk if it lies under the scan root.
    ///
    /// Used to keep a report written inside the tree from counting itself.
    /// Paths that do not exist yet, or live outside the root, are ignored.
    pub fn exclude(mut self, path: impl AsRef<Path>) -> Self {
        let resolved = fs::canonicalize(&self.root)
            .and_then(|root| Ok((root, fs::canonicalize(path.as_ref())?)));
        if let Ok((root, path)) = resolved {
            if let Ok(rel) = path.strip_prefix(&root) {
                self.excluded.push(rel.to_path_buf());
            }
        }
        self
    }

    fn walk_error(&self, err: walkdir::Error) -> BracketError {
        let message = err.to_string();
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
        BracketError::FileRead { path, source }
    }
}

/// Start a walk over `root`.
///
/// Fails with [`BracketError::RootNotFound`] before yielding anything if the
/// root does not exist. An empty directory yields nothing.
pub fn scan(root: impl AsRef<Path>) -> Result<Scan> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(BracketError::RootNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    Ok(Scan {
        root: root.to_path_buf(),
        walker,
        excluded: Vec::new(),
    })
}
