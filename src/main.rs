/*!
 * Command-line interface for dirusage
 */

use std::env;
use std::io;
use std::process::ExitCode;

use dirusage::config::{usage, Args, Config};
use dirusage::error::Result;
use dirusage::histogram::ModTimeHistogrammer;
use dirusage::logging::init_logging;
use dirusage::report::{ReportFormat, Reporter, ScanReport};
use dirusage::scanner::SpaceCalculator;
use dirusage::VERSION;

fn main() -> ExitCode {
    init_logging();
    tracing::debug!("dirusage {}", VERSION);

    let words: Vec<_> = env::args_os().collect();
    let args = match Args::try_from_words(words.iter().cloned()) {
        Ok(args) => args,
        Err(e) => {
            tracing::debug!("rejecting invocation: {}", e);
            let program = words
                .first()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| "dirusage".to_string());
            println!("{}", usage(&program));
            return ExitCode::FAILURE;
        }
    };

    match run(Config::from_args(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(path) = e.path() {
                tracing::debug!("failed at {}", path.display());
            }
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    let reporter = Reporter::new(ReportFormat::PlainText);
    let mut stdout = io::stdout();

    // Scan directory
    let calculator = SpaceCalculator::new(config.size_range);
    let total_bytes = calculator.compute_used_space(&config.target_dir)?;

    reporter.write_summary(
        &mut stdout,
        &ScanReport {
            path: config.display_path.clone(),
            size_range: config.size_range,
            total_bytes,
        },
    )?;

    // Histogram of immediate children
    let table = ModTimeHistogrammer::new().compute_hour_histogram(&config.target_dir)?;
    reporter.write_histogram(&mut stdout, &table)?;

    Ok(())
}
