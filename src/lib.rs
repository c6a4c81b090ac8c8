/*!
 * dirusage - Measure disk space used under a directory tree
 *
 * This library sums the sizes of regular files below a path, optionally
 * filtered by an inclusive byte-size range, and counts a directory's
 * immediate children by the local hour they were last modified.
 */

pub mod config;
pub mod error;
pub mod histogram;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use config::{Args, Config, SizeRange};
pub use error::{DirUsageError, Result};
pub use histogram::ModTimeHistogrammer;
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::SpaceCalculator;
pub use types::{EntryKind, FilesystemEntry, HourBucketTable};
pub use utils::list_children;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
