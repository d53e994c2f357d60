//! Command-line argument definitions for the collection converter
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ConverterConfig;
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the MoMA collection converter
///
/// Converts the Museum of Modern Art collection metadata from CSV into
/// Turtle, splitting compound free-text fields into atomic facts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "moma-rdf",
    version,
    about = "Convert MoMA collection CSV records to Turtle linked data",
    long_about = "Converts the Museum of Modern Art collection metadata (Artworks.csv) into \
                  Turtle. Every artwork becomes one subject block carrying the original fields \
                  plus atomic facts extracted from them: artist life dates and nationality, \
                  work start and finish years, and metric dimensions."
)]
pub struct Args {
    /// Collection CSV file to convert
    ///
    /// Must be UTF-8, comma separated, with the fourteen Artworks.csv columns.
    #[arg(value_name = "INPUT")]
    pub input_path: Option<PathBuf>,

    /// Output file for the Turtle document
    ///
    /// If not specified, the document is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write Turtle to a file instead of stdout"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML file with subject_base, include_provenance and [[namespaces]] entries.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Base URI for artwork subjects; the ObjectID is appended
    #[arg(long = "subject-base", value_name = "URI")]
    pub subject_base: Option<String>,

    /// Omit the provenance comment block
    #[arg(long = "no-provenance")]
    pub no_provenance: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Format of the final statistics report
    #[arg(
        long = "report",
        value_enum,
        default_value = "human",
        help = "Format of the statistics report written to stderr"
    )]
    pub report_format: ReportFormat,
}

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    Human,
    /// JSON for scripting
    Json,
    /// No report
    None,
}

impl Args {
    /// Input path, or a usage error when none was given
    pub fn require_input(&self) -> Result<&Path> {
        self.input_path
            .as_deref()
            .ok_or_else(|| Error::usage("No filename provided as input."))
    }

    /// Validate argument consistency
    pub fn validate(&self) -> Result<()> {
        self.require_input()?;

        if let Some(output_path) = &self.output_path {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the converter configuration: file first, then command-line overrides
    pub fn load_config(&self) -> Result<ConverterConfig> {
        let mut config = match &self.config_file {
            Some(path) => ConverterConfig::load_from_file(path)?,
            None => ConverterConfig::default(),
        };

        if let Some(subject_base) = &self.subject_base {
            config = config.with_subject_base(subject_base.clone());
        }
        if self.no_provenance {
            config = config.without_provenance();
        }

        config.validate()?;
        Ok(config)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show a progress spinner
    ///
    /// Only when writing to a file, so the spinner never interleaves with
    /// Turtle on stdout.
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_path.is_some()
    }
}
