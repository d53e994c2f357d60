//! Streaming reader for collection CSV files
//!
//! Records are read without header handling; the header row flows through
//! the pipeline like any other row and is recognized by the validator.
//! Records with the wrong column count and records the CSV decoder rejects
//! are surfaced as values so the converter can report them and carry on.

use crate::app::models::InputRow;
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// One record read from the input
#[derive(Debug, Clone, PartialEq)]
pub enum RowRecord {
    /// A record with the full collection layout
    Row { position: u64, row: InputRow },
    /// A record with too few or too many columns
    WrongShape { position: u64, fields: Vec<String> },
    /// A record the CSV decoder could not read
    Unreadable { position: u64, message: String },
}

impl RowRecord {
    /// One-based record number within the input
    pub fn position(&self) -> u64 {
        match self {
            RowRecord::Row { position, .. }
            | RowRecord::WrongShape { position, .. }
            | RowRecord::Unreadable { position, .. } => *position,
        }
    }
}

/// Iterator over the records of a collection CSV
pub struct RowReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    source: String,
    records_read: u64,
}

/// Open an input file, reporting a missing file by name
pub fn open_input_file(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
        _ => Error::io(format!("Failed to open {}", path.display()), e),
    })?;
    debug!("Opened input file {}", path.display());
    Ok(file)
}

impl RowReader<File> {
    /// Open a collection CSV file
    pub fn open(path: &Path) -> Result<Self> {
        let file = open_input_file(path)?;
        Ok(Self::from_reader(file, path.display().to_string()))
    }
}

impl<R: Read> RowReader<R> {
    /// Read collection records from any byte source
    pub fn from_reader(reader: R, source: impl Into<String>) -> Self {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        Self {
            records,
            source: source.into(),
            records_read: 0,
        }
    }

    /// Number of records read so far
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    fn classify_record(&self, record: StringRecord) -> RowRecord {
        let position = self.records_read;

        match InputRow::from_fields(record.iter()) {
            Ok(row) => RowRecord::Row { position, row },
            Err(_) => {
                warn!(
                    "Record {} in {} has {} columns",
                    position,
                    self.source,
                    record.len()
                );
                RowRecord::WrongShape {
                    position,
                    fields: record.iter().map(str::to_string).collect(),
                }
            }
        }
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<RowRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        self.records_read += 1;

        Some(match result {
            Ok(record) => Ok(self.classify_record(record)),
            Err(e) if e.is_io_error() => Err(Error::csv_parsing(
                self.source.clone(),
                "Failed to read input",
                Some(e),
            )),
            Err(e) => {
                warn!(
                    "Record {} in {} could not be decoded: {}",
                    self.records_read, self.source, e
                );
                Ok(RowRecord::Unreadable {
                    position: self.records_read,
                    message: e.to_string(),
                })
            }
        })
    }
}
