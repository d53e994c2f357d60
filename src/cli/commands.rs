//! Command implementation for the collection converter CLI
//!
//! This module contains the main execution logic, progress reporting,
//! and the final statistics report.

use crate::app::services::converter::{ConversionStats, Converter};
use crate::app::services::field_extractor::Rule;
use crate::app::services::row_reader::{RowReader, open_input_file};
use crate::app::services::turtle_writer::TurtleWriter;
use crate::cli::args::{Args, ReportFormat};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Main command runner
///
/// This function orchestrates the conversion:
/// 1. Set up logging and validate arguments
/// 2. Load configuration (file, then command-line overrides)
/// 3. Stream the input through the converter into the output
/// 4. Report statistics
pub fn run(args: Args) -> Result<ConversionStats> {
    setup_logging(&args);

    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let config = args.load_config()?;
    debug!("Loaded configuration: {:?}", config);
    let converter = Converter::new(config)?;

    let input_path = args.require_input()?;
    info!("Converting {}", input_path.display());

    let (input, progress_bar) = open_input(input_path, args.show_progress())?;
    let reader = RowReader::from_reader(input, input_path.display().to_string());

    let output = open_output(args.output_path.as_deref())?;
    let mut writer = TurtleWriter::new(BufWriter::new(output));

    let stats = converter.convert(reader, &mut writer)?;
    writer.finish()?;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Conversion complete");
    }

    if let Some(output_path) = &args.output_path {
        info!("Turtle written to {}", output_path.display());
    }

    generate_final_report(&args, &stats)?;
    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("moma_rdf={}", log_level)));

    // A subscriber may already be installed when run is called more than once
    let installed = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Open the input file, wrapped in a byte progress bar when requested
fn open_input(path: &Path, show_progress: bool) -> Result<(Box<dyn Read>, Option<ProgressBar>)> {
    let file = open_input_file(path)?;

    if !show_progress {
        return Ok((Box::new(file), None));
    }

    let file_size = file
        .metadata()
        .map_err(|e| Error::io(format!("Failed to read metadata for {}", path.display()), e))?
        .len();

    let pb = ProgressBar::new(file_size);
    let style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} Converting [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        )
        .map_err(|e| Error::configuration(format!("Invalid progress template: {}", e)))?
        .progress_chars("#>-");
    pb.set_style(style);

    Ok((Box::new(pb.wrap_read(file)), Some(pb)))
}

/// Open the output sink: a file when a path is given, stdout otherwise
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Generate final conversion report
fn generate_final_report(args: &Args, stats: &ConversionStats) -> Result<()> {
    match args.report_format {
        ReportFormat::Human if !args.quiet => generate_human_report(stats),
        ReportFormat::Human | ReportFormat::None => Ok(()),
        ReportFormat::Json => generate_json_report(stats),
    }
}

/// Generate human-readable report on stderr
fn generate_human_report(stats: &ConversionStats) -> Result<()> {
    let mut err = io::stderr().lock();
    let duration = HumanDuration(stats.elapsed);

    writeln!(err)?;
    writeln!(err, "{}", "Conversion Complete".green().bold())?;
    writeln!(err, "-------------------------------------")?;
    writeln!(err, "   Records read: {}", stats.records_read)?;
    writeln!(err, "   Header rows skipped: {}", stats.header_rows)?;
    writeln!(err, "   Subjects written: {}", stats.valid_rows)?;
    writeln!(err, "   Statements written: {}", stats.statements_written)?;
    writeln!(err, "   Processing time: {}", duration)?;

    if stats.malformed_rows > 0 {
        writeln!(
            err,
            "{}",
            format!("   Malformed rows: {}", stats.malformed_rows).yellow()
        )?;
    }

    if stats.coverage.total_misses() > 0 {
        writeln!(err, "\n   Unmatched non-blank fields:")?;
        for rule in Rule::ALL {
            let misses = stats.coverage.misses_for(rule);
            if misses > 0 {
                writeln!(
                    err,
                    "   - {} ({}): {}",
                    rule,
                    rule.source_column(),
                    misses
                )?;
            }
        }
    }

    writeln!(err)?;
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ConversionStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)
        .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))?;
    eprintln!("{}", json);
    Ok(())
}
