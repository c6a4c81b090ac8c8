/*!
 * Configuration handling for dirusage
 */

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{DirUsageError, Result};
use crate::utils::parse_size_bound;

/// Bound value that means "no bound on this side"
pub const UNBOUNDED: i64 = -1;

/// Fewest and most command-line words accepted, program name included
pub const MIN_ARGS: usize = 2;
pub const MAX_ARGS: usize = 4;

/// Command-line arguments for dirusage
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirusage",
    version = env!("CARGO_PKG_VERSION"),
    about = "Measure disk space used under a directory and chart file modification hours",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Directory (or file) to measure
    #[clap(allow_hyphen_values = true)]
    pub directory: OsString,

    /// Smallest file size in bytes to count
    #[clap(allow_hyphen_values = true)]
    pub min_size: Option<OsString>,

    /// Largest file size in bytes to count
    #[clap(allow_hyphen_values = true)]
    pub max_size: Option<OsString>,
}

impl Args {
    /// Parse arguments, rejecting any word count outside `MIN_ARGS..=MAX_ARGS`
    pub fn try_from_words<I, T>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let words: Vec<OsString> = words.into_iter().map(Into::into).collect();
        if !(MIN_ARGS..=MAX_ARGS).contains(&words.len()) {
            return Err(DirUsageError::InvalidArgument(format!(
                "expected 1 to 3 arguments, got {}",
                words.len().saturating_sub(1)
            )));
        }

        // Everything after the program name is a positional, `--` included
        let (program, rest) = words.split_at(1);
        let escaped = program
            .iter()
            .cloned()
            .chain(std::iter::once(OsString::from("--")))
            .chain(rest.iter().cloned());

        Self::try_parse_from(escaped).map_err(|e| DirUsageError::InvalidArgument(e.to_string()))
    }
}

/// Two-line usage message printed for a bad invocation
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} <directory> [min_size] [max_size]\n\
         Optional: [min_size] and [max_size] to filter files within the specified range.",
        program
    )
}

/// Inclusive size filter applied to regular files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeRange {
    lower: Option<i64>,
    upper: Option<i64>,
}

impl SizeRange {
    /// A range every size satisfies
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a range from raw bound values.
    ///
    /// `UNBOUNDED` (-1) on either side means that side is absent, so an
    /// explicit `-1` cannot be told apart from an omitted bound.
    pub fn from_raw(lower: i64, upper: i64) -> Self {
        let bound = |value| (value != UNBOUNDED).then_some(value);
        Self {
            lower: bound(lower),
            upper: bound(upper),
        }
    }

    pub fn lower(&self) -> Option<i64> {
        self.lower
    }

    pub fn upper(&self) -> Option<i64> {
        self.upper
    }

    /// Whether either side carries a bound
    pub fn is_bounded(&self) -> bool {
        self.lower.is_some() || self.upper.is_some()
    }

    /// Check `size` against both inclusive bounds
    pub fn contains(&self, size: u64) -> bool {
        let size = i128::from(size);
        self.lower.map_or(true, |min| size >= i128::from(min))
            && self.upper.map_or(true, |max| size <= i128::from(max))
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to measure
    pub target_dir: PathBuf,

    /// Path as the user typed it, for the summary line
    pub display_path: String,

    /// Size filter for the space calculation
    pub size_range: SizeRange,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let bound = |arg: Option<OsString>| {
            arg.map_or(UNBOUNDED, |text| parse_size_bound(&text.to_string_lossy()))
        };
        let lower = bound(args.min_size);
        let upper = bound(args.max_size);

        Self {
            display_path: args.directory.to_string_lossy().into_owned(),
            target_dir: PathBuf::from(args.directory),
            size_range: SizeRange::from_raw(lower, upper),
        }
    }
}
