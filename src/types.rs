/*!
 * Core types and data structures for dirusage
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Number of hour-of-day buckets in a histogram
pub const HOURS_PER_DAY: usize = 24;

/// Classification of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// File holding byte content
    RegularFile,
    /// Directory containing other entries
    Directory,
    /// Symbolic links, devices, sockets, fifos
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_file() {
            Self::RegularFile
        } else if file_type.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}

/// A point-in-time snapshot of one filesystem entry.
///
/// Read fresh on every visit and never cached.
#[derive(Debug, Clone)]
pub struct FilesystemEntry {
    /// Path the entry was inspected at
    pub path: PathBuf,
    /// Entry classification
    pub kind: EntryKind,
    /// Size in bytes as reported by the filesystem
    pub size: u64,
    /// Last modification time, when the platform reports one
    pub modified: Option<SystemTime>,
}

impl FilesystemEntry {
    /// Inspect `path` without following a trailing symbolic link
    pub fn inspect(path: &Path) -> io::Result<Self> {
        fs::symlink_metadata(path).map(|metadata| Self::from_metadata(path, &metadata))
    }

    /// Inspect `path`, resolving symbolic links to their target
    pub fn inspect_following(path: &Path) -> io::Result<Self> {
        fs::metadata(path).map(|metadata| Self::from_metadata(path, &metadata))
    }

    fn from_metadata(path: &Path, metadata: &fs::Metadata) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: EntryKind::from(metadata.file_type()),
            size: metadata.len(),
            modified: metadata.modified().ok(),
        }
    }

    pub fn is_regular_file(&self) -> bool {
        self.kind == EntryKind::RegularFile
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// File counts keyed by local hour-of-day (0-23)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourBucketTable {
    counts: [u64; HOURS_PER_DAY],
}

impl HourBucketTable {
    /// Create a table with every bucket at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one entry in the bucket for `hour`.
    ///
    /// # Panics
    ///
    /// Panics if `hour` is not in `0..24`.
    pub fn record(&mut self, hour: u32) {
        self.counts[hour as usize] += 1;
    }

    /// Count for a single hour; out-of-range hours read as zero
    pub fn count(&self, hour: usize) -> u64 {
        self.counts.get(hour).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64; HOURS_PER_DAY] {
        &self.counts
    }

    /// Sum over all buckets
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(hour, count)` pairs in increasing hour order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}
