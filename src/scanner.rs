/*!
 * Recursive disk space calculation
 */

use std::path::Path;

use tracing::{debug, trace};

use crate::config::SizeRange;
use crate::error::{DirUsageError, Result};
use crate::types::{EntryKind, FilesystemEntry};
use crate::utils::list_children;

/// Sums the sizes of regular files reachable from a path
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceCalculator {
    /// Filter applied to every regular file
    range: SizeRange,
}

impl SpaceCalculator {
    /// Create a calculator that counts files inside `range`
    pub fn new(range: SizeRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> SizeRange {
        self.range
    }

    /// Total bytes used by regular files under `path`.
    ///
    /// Entries are classified without following symbolic links: links,
    /// devices, sockets and fifos add nothing and are never descended into.
    /// Directories add nothing themselves. Any path that cannot be inspected
    /// and any directory that cannot be listed aborts the whole walk.
    pub fn compute_used_space(&self, path: &Path) -> Result<u64> {
        let entry =
            FilesystemEntry::inspect(path).map_err(|source| DirUsageError::PathInaccessible {
                path: path.to_path_buf(),
                source,
            })?;

        match entry.kind {
            EntryKind::RegularFile => Ok(self.file_contribution(&entry)),
            EntryKind::Directory => self.scan_directory(path),
            EntryKind::Other => {
                trace!("skipping special entry {}", path.display());
                Ok(0)
            }
        }
    }

    /// Sum the contributions of every child of a directory
    fn scan_directory(&self, path: &Path) -> Result<u64> {
        let children = list_children(path)?;
        debug!("scanning {} ({} entries)", path.display(), children.len());

        let mut total: u64 = 0;
        for child in &children {
            total = total.saturating_add(self.compute_used_space(child)?);
        }

        Ok(total)
    }

    fn file_contribution(&self, entry: &FilesystemEntry) -> u64 {
        if self.range.contains(entry.size) {
            trace!("counting {} ({} bytes)", entry.path.display(), entry.size);
            entry.size
        } else {
            trace!("{} ({} bytes) outside size range", entry.path.display(), entry.size);
            0
        }
    }
}
