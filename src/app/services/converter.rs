//! Per-row conversion pipeline
//!
//! Each record flows through validation, extraction and emission before it
//! reaches the writer. Rows are independent: the only state carried across
//! rows is the statistics gathered for the final report.

use crate::app::models::{ExtractedFacts, Fact, InputRow, MalformedReason, RowClass};
use crate::app::services::fact_emitter::{emit, subject_uri};
use crate::app::services::field_extractor::{ExtractionCoverage, extract};
use crate::app::services::row_reader::{RowReader, RowRecord};
use crate::app::services::row_validator::classify;
use crate::app::services::turtle_writer::TurtleWriter;
use crate::config::ConverterConfig;
use crate::Result;
use serde::Serialize;
use std::io::{Read, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics for one conversion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionStats {
    /// Records read from the input, header included
    pub records_read: u64,
    /// Header rows skipped
    pub header_rows: usize,
    /// Rows replaced by a diagnostic
    pub malformed_rows: usize,
    /// Rows written as subject blocks
    pub valid_rows: usize,
    /// Predicate-object statements written
    pub statements_written: usize,
    /// Non-blank fields that a pattern rule could not match
    pub coverage: ExtractionCoverage,
    /// Wall-clock conversion time
    #[serde(serialize_with = "serialize_duration_secs")]
    pub elapsed: Duration,
}

impl ConversionStats {
    /// Percentage of data rows that were converted
    pub fn success_rate(&self) -> f64 {
        let data_rows = self.valid_rows + self.malformed_rows;
        if data_rows == 0 {
            100.0
        } else {
            (self.valid_rows as f64 / data_rows as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Conversion Summary: {} records -> {} subjects ({:.1}% success) | \
             Statements: {} | Malformed: {} | Unmatched fields: {}",
            self.records_read,
            self.valid_rows,
            self.success_rate(),
            self.statements_written,
            self.malformed_rows,
            self.coverage.total_misses()
        )
    }
}

fn serialize_duration_secs<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// What a single row turns into
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Header row; nothing is written
    Skipped,
    /// Malformed row; a diagnostic is written instead of statements
    Diagnostic(MalformedReason),
    /// Valid row with its subject and ordered facts
    Block {
        subject: String,
        extracted: ExtractedFacts,
        facts: Vec<Fact>,
    },
}

/// Converts collection rows into Turtle subject blocks
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter after validating its configuration
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Validate, extract and emit a single row
    pub fn process_row(&self, row: &InputRow) -> RowOutcome {
        match classify(row) {
            RowClass::Header => RowOutcome::Skipped,
            RowClass::Malformed(reason) => RowOutcome::Diagnostic(reason),
            RowClass::Valid => {
                let extracted = extract(row);
                let facts = emit(row, &extracted);
                RowOutcome::Block {
                    subject: subject_uri(&self.config.subject_base, &row.object_id),
                    extracted,
                    facts,
                }
            }
        }
    }

    /// Convert every record from the reader into the writer
    ///
    /// The prologue is written first. Malformed records produce diagnostics
    /// and conversion continues; only read or write failures abort.
    pub fn convert<R: Read, W: Write>(
        &self,
        reader: RowReader<R>,
        writer: &mut TurtleWriter<W>,
    ) -> Result<ConversionStats> {
        let start_time = Instant::now();
        let mut stats = ConversionStats::default();

        writer.write_prologue(self.config.namespace_pairs(), self.config.include_provenance)?;

        for record in reader {
            let record = record?;
            stats.records_read += 1;

            match record {
                RowRecord::Row { position, row } => match self.process_row(&row) {
                    RowOutcome::Skipped => {
                        debug!("Skipping header row at record {}", position);
                        stats.header_rows += 1;
                    }
                    RowOutcome::Diagnostic(reason) => {
                        writer.write_diagnostic(position, &reason, &row.fields())?;
                        stats.malformed_rows += 1;
                    }
                    RowOutcome::Block {
                        subject,
                        extracted,
                        facts,
                    } => {
                        stats.coverage.record(&row, &extracted);
                        writer.write_block(&subject, &facts)?;
                        stats.valid_rows += 1;
                        stats.statements_written += facts.len();
                    }
                },
                RowRecord::WrongShape { position, fields } => {
                    let reason = MalformedReason::ColumnCount {
                        found: fields.len(),
                    };
                    writer.write_diagnostic(position, &reason, &fields)?;
                    stats.malformed_rows += 1;
                }
                RowRecord::Unreadable { position, message } => {
                    let no_fields: [&str; 0] = [];
                    writer.write_diagnostic(
                        position,
                        &MalformedReason::Unreadable(message),
                        &no_fields,
                    )?;
                    stats.malformed_rows += 1;
                }
            }
        }

        stats.elapsed = start_time.elapsed();
        info!("{}", stats.summary());
        Ok(stats)
    }
}
