//! Per-file bracket counting.
//!
//! Content is treated as UTF-8. Invalid sequences are tolerated rather than
//! rejected, so binary files produce a deterministic (if meaningless) tally
//! instead of an error. Every tracked bracket is ASCII and an ASCII byte is
//! never part of a multi-byte or invalid sequence, so counting the raw bytes
//! of a stream gives the same tally as counting the lossily decoded text.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::BracketError;
use crate::Result;

use super::tally::{BracketKind, BracketTally};

/// Count the opening brackets in `text` in a single pass.
///
/// No matching is attempted: an unbalanced or quoted bracket counts the
/// same as any other.
///
/// ```rust
/// use bracketcountlib::count_str;
///
/// let tally = count_str("fn main() { let v = vec![1]; }");
/// assert_eq!(tally.parentheses, 1);
/// assert_eq!(tally.square, 1);
/// assert_eq!(tally.curly, 1);
/// assert_eq!(tally.angle, 0);
/// ```
pub fn count_str(text: &str) -> BracketTally {
    let mut tally = BracketTally::new();
    for kind in text.chars().filter_map(BracketKind::from_char) {
        tally.record(kind);
    }
    tally
}

fn record_bytes(tally: &mut BracketTally, bytes: &[u8]) {
    for kind in bytes
        .iter()
        .filter(|b| b.is_ascii())
        .filter_map(|&b| BracketKind::from_char(char::from(b)))
    {
        tally.record(kind);
    }
}

/// Stream everything from `reader` and count it.
///
/// Only the reader's buffer is held in memory. `origin` names the source in
/// the error if reading fails.
pub fn count_reader<R: Read>(reader: R, origin: &Path) -> Result<BracketTally> {
    let mut reader = BufReader::new(reader);
    let mut tally = BracketTally::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(BracketError::FileRead {
                    path: origin.to_path_buf(),
                    source: e,
                })
            }
        };
        if buf.is_empty() {
            break;
        }
        record_bytes(&mut tally, buf);
        let consumed = buf.len();
        reader.consume(consumed);
    }

    Ok(tally)
}

/// Count the brackets in the file at `path`.
pub fn count_file(path: impl AsRef<Path>) -> Result<BracketTally> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| BracketError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    count_reader(file, path)
}
