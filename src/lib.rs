//! MoMA Collection RDF Library
//!
//! A Rust library for converting the Museum of Modern Art collection
//! metadata (`Artworks.csv`) into Turtle linked data.
//!
//! This library provides tools for:
//! - Reading fixed-layout collection records from CSV
//! - Classifying rows as header, malformed or valid
//! - Extracting atomic facts (life dates, nationality, work dates, metric
//!   dimensions) from loosely formatted free-text fields
//! - Emitting an ordered sequence of typed facts per artwork
//! - Writing subject blocks, prefixes and provenance as Turtle

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod converter;
        pub mod fact_emitter;
        pub mod field_extractor;
        pub mod row_reader;
        pub mod row_validator;
        pub mod turtle_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ExtractedFacts, Fact, FactValue, InputRow, RowClass, ValueKind};
pub use config::ConverterConfig;

/// Result type alias for the converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for collection conversion
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Command line was missing required input
    #[error("{message}")]
    Usage { message: String },

    /// Input file does not exist
    #[error("File {path} not found.")]
    FileNotFound { path: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Record does not have the fixed collection layout
    #[error("Record has {found} fields, expected {expected}")]
    RowShape { expected: usize, found: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file '{path}': {source}")]
    ConfigParsing {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a row shape error
    pub fn row_shape(expected: usize, found: usize) -> Self {
        Self::RowShape { expected, found }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parsing error
    pub fn config_parsing(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParsing {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            _ => 1,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
