//! Plain-text rendering of a [`FileReport`] and writing it to disk.
//!
//! The layout is fixed:
//!
//! ```text
//! Brackets count
//!
//! ==============================
//! <file>
//!
//! (: <n>
//! [: <n>
//! {: <n>
//! <: <n>
//!
//! ==============================
//! Total parentheses: <n>
//! Total square: <n>
//! Total curly: <n>
//! Total angle: <n>
//! Total brackets: <n>
//! ```
//!
//! Per-file lines with a zero count are left out. The total lines are always
//! present.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::data::{BracketKind, BracketTally, FileReport};
use crate::error::BracketError;
use crate::Result;

/// Title line at the top of every report.
pub const REPORT_TITLE: &str = "Brackets count";

/// Rule separating file sections and the totals block.
pub const RULE: &str = "==============================";

/// Display adapter that lays out a [`FileReport`] as report text.
#[derive(Debug, Clone, Copy)]
pub struct ReportText<'a>(pub &'a FileReport);

fn fmt_tally(f: &mut fmt::Formatter<'_>, tally: &BracketTally) -> fmt::Result {
    for kind in BracketKind::ALL {
        let count = tally.get(kind);
        if count > 0 {
            writeln!(f, "{}: {}", kind.opening(), count)?;
        }
    }
    Ok(())
}

fn fmt_totals(f: &mut fmt::Formatter<'_>, total: &BracketTally) -> fmt::Result {
    for kind in BracketKind::ALL {
        writeln!(f, "Total {}: {}", kind.label(), total.get(kind))?;
    }
    writeln!(f, "Total brackets: {}", total.total())
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f)?;

        for entry in self.0.entries() {
            writeln!(f, "{RULE}")?;
            writeln!(f, "{}", entry.name)?;
            writeln!(f)?;
            fmt_tally(f, &entry.tally)?;
            writeln!(f)?;
        }

        writeln!(f, "{RULE}")?;
        fmt_totals(f, &self.0.grand_total())
    }
}

/// Render the report text. Pure: same report in, same bytes out.
///
/// ```rust
/// use bracketcountlib::{render, BracketTally, FileReport};
///
/// let report = FileReport::new().with(
///     "Main.java",
///     BracketTally { parentheses: 2, square: 1, curly: 2, angle: 0 },
/// );
/// let text = render(&report);
///
/// assert!(text.starts_with("Brackets count\n\n"));
/// assert!(text.contains("\nMain.java\n\n(: 2\n[: 1\n{: 2\n\n"));
/// assert!(text.ends_with("Total angle: 0\nTotal brackets: 5\n"));
/// ```
pub fn render(report: &FileReport) -> String {
    ReportText(report).to_string()
}

/// Write `text` to `destination`, replacing whatever was there.
///
/// Missing parent directories are created. The file is truncated on open and
/// the handle is closed before returning, on success or failure.
pub fn write_report(text: &str, destination: impl AsRef<Path>) -> Result<()> {
    let destination = destination.as_ref();
    let output_err = |e| BracketError::OutputWrite {
        path: destination.to_path_buf(),
        source: e,
    };

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_err)?;
    }

    let file = File::create(destination).map_err(output_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(output_err)?;
    writer.flush().map_err(output_err)?;

    info!(destination = %destination.display(), bytes = text.len(), "report written");
    Ok(())
}
