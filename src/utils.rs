/*!
 * Utility functions for dirusage
 */

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::error::{DirUsageError, Result};

/// List the immediate children of `dir`.
///
/// The `.` and `..` pseudo-entries are never returned. The listing is read to
/// the end and the directory handle closed before this returns, so callers can
/// recurse into children without holding it open.
///
/// A child whose type could not be read is still listed; the caller decides
/// what a failed inspection of that child means.
pub fn list_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = |source: io::Error| DirUsageError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut children = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).follow_links(false) {
        match entry {
            Ok(entry) if entry.depth() == 0 => {
                // A symlinked root reports the link's own type
                if !entry.file_type().is_dir() && !entry.path().is_dir() {
                    return Err(unreadable(io::Error::new(
                        io::ErrorKind::Other,
                        "Not a directory",
                    )));
                }
            }
            Ok(entry) => children.push(entry.into_path()),
            Err(err) if err.depth() > 0 && err.path().is_some() => {
                trace!("listing {} without a file type", err.path().unwrap_or(dir).display());
                children.extend(err.path().map(Path::to_path_buf));
            }
            Err(err) => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk error"));
                return Err(unreadable(source));
            }
        }
    }

    Ok(children)
}

/// Parse a size bound the way C's `atoll` does.
///
/// Leading whitespace is skipped, an optional sign is honoured and the longest
/// run of digits is used. Text with no leading digits yields 0, and values past
/// the `i64` range saturate.
pub fn parse_size_bound(text: &str) -> i64 {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value
}
