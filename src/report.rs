/*!
 * Reporting functionality for dirusage
 *
 * Renders the disk space summary and the modification-hour table as plain
 * text, in the exact layout the command prints.
 */

use std::io::{self, Write};

use crate::config::SizeRange;
use crate::types::HourBucketTable;

/// Result of the space calculation
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Path as given on the command line
    pub path: String,
    /// Size filter that was applied
    pub size_range: SizeRange,
    /// Bytes used by matching regular files
    pub total_bytes: u64,
}

/// Format of the report output
pub enum ReportFormat {
    /// Plain text, one fact per line
    PlainText,
}

/// Report generator for scan results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Summary line for the space calculation, without trailing newline
    pub fn summary_line(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::PlainText => plain_summary(report),
        }
    }

    /// Header plus one line per hour, without trailing newline
    pub fn histogram_table(&self, table: &HourBucketTable) -> String {
        match self.format {
            ReportFormat::PlainText => plain_histogram(table),
        }
    }

    /// Write the summary line followed by a newline
    pub fn write_summary<W: Write>(&self, out: &mut W, report: &ScanReport) -> io::Result<()> {
        writeln!(out, "{}", self.summary_line(report))?;
        out.flush()
    }

    /// Write the hour table followed by a newline
    pub fn write_histogram<W: Write>(
        &self,
        out: &mut W,
        table: &HourBucketTable,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.histogram_table(table))?;
        out.flush()
    }
}

// Upper bound keeps its leading "and" even when no lower bound is printed
fn plain_summary(report: &ScanReport) -> String {
    use std::fmt::Write;

    let mut line = format!("Total disk space used by {}", report.path);
    let range = &report.size_range;

    if range.is_bounded() {
        line.push_str(" within the size range ");
        if let Some(min) = range.lower() {
            let _ = write!(line, ">= {} bytes ", min);
        }
        if let Some(max) = range.upper() {
            let _ = write!(line, "and <= {} bytes ", max);
        }
    }

    let _ = write!(line, ": {} bytes", report.total_bytes);
    line
}

fn plain_histogram(table: &HourBucketTable) -> String {
    use std::fmt::Write;

    let mut out = String::from("Distribution of file counts based on last modified time:");
    for (hour, count) in table.iter() {
        let _ = write!(out, "\nHour {:02}: {} files", hour, count);
    }
    out
}
