//! Data models for collection conversion
//!
//! This module contains the core data structures flowing through the
//! converter: the fixed-layout collection record, the atomic values
//! extracted from its free-text fields, and the typed facts emitted for it.

use crate::constants::{COLUMN_COUNT, columns};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

// =============================================================================
// Input Record
// =============================================================================

/// One artwork record with its fourteen positional text fields
///
/// Field values are stored exactly as read from the CSV; any trimming or
/// escaping happens when facts are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputRow {
    pub title: String,
    pub artist: String,
    pub artist_bio: String,
    pub date: String,
    pub medium: String,
    pub dimensions: String,
    pub credit_line: String,
    pub moma_number: String,
    pub classification: String,
    pub department: String,
    pub date_acquired: String,
    pub curator_approved: String,
    pub object_id: String,
    pub url: String,
}

impl InputRow {
    /// Build a row from exactly [`COLUMN_COUNT`] fields in collection order
    pub fn from_fields<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.len() != COLUMN_COUNT {
            return Err(Error::row_shape(COLUMN_COUNT, fields.len()));
        }

        let mut take = |index: usize| std::mem::take(&mut fields[index]);

        Ok(Self {
            title: take(columns::TITLE),
            artist: take(columns::ARTIST),
            artist_bio: take(columns::ARTIST_BIO),
            date: take(columns::DATE),
            medium: take(columns::MEDIUM),
            dimensions: take(columns::DIMENSIONS),
            credit_line: take(columns::CREDIT_LINE),
            moma_number: take(columns::MOMA_NUMBER),
            classification: take(columns::CLASSIFICATION),
            department: take(columns::DEPARTMENT),
            date_acquired: take(columns::DATE_ACQUIRED),
            curator_approved: take(columns::CURATOR_APPROVED),
            object_id: take(columns::OBJECT_ID),
            url: take(columns::URL),
        })
    }

    /// Field values in collection column order
    pub fn fields(&self) -> [&str; COLUMN_COUNT] {
        [
            self.title.as_str(),
            self.artist.as_str(),
            self.artist_bio.as_str(),
            self.date.as_str(),
            self.medium.as_str(),
            self.dimensions.as_str(),
            self.credit_line.as_str(),
            self.moma_number.as_str(),
            self.classification.as_str(),
            self.department.as_str(),
            self.date_acquired.as_str(),
            self.curator_approved.as_str(),
            self.object_id.as_str(),
            self.url.as_str(),
        ]
    }
}

// =============================================================================
// Extracted Values
// =============================================================================

/// Atomic values pulled out of a row's free-text fields
///
/// Every field starts absent and is only populated by the field extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedFacts {
    /// Four-digit birth year from the artist biography
    pub birth_year: Option<String>,
    /// Four-digit death year from the artist biography
    pub death_year: Option<String>,
    /// Up to two citizenship countries, in the order they appear
    pub citizenship_countries: Vec<String>,
    /// Country of birth from a ", born <place>" clause
    pub birth_country: Option<String>,
    /// First year of a work date range
    pub work_start_date: Option<String>,
    /// Completion year of the work
    pub work_finish_date: Option<String>,
    pub height_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub depth_cm: Option<f64>,
    /// Qualifying text found alongside the dimension figures
    pub dimensions_note: Option<String>,
}

impl ExtractedFacts {
    /// First citizenship country, if any
    pub fn citizenship_country1(&self) -> Option<&str> {
        self.citizenship_countries.first().map(String::as_str)
    }

    /// Second citizenship country, if any
    pub fn citizenship_country2(&self) -> Option<&str> {
        self.citizenship_countries.get(1).map(String::as_str)
    }

    /// Check whether no rule produced any value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Facts
// =============================================================================

/// Rendering discipline applied to a fact's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    String,
    Date,
    Numeric,
    Boolean,
    Uri,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Date => "date",
            ValueKind::Numeric => "numeric",
            ValueKind::Boolean => "boolean",
            ValueKind::Uri => "uri",
        };
        f.write_str(name)
    }
}

/// Typed value of a fact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FactValue {
    String(String),
    Date(String),
    Numeric(f64),
    Boolean(bool),
    Uri(String),
}

impl FactValue {
    /// Value kind of this fact value
    pub fn kind(&self) -> ValueKind {
        match self {
            FactValue::String(_) => ValueKind::String,
            FactValue::Date(_) => ValueKind::Date,
            FactValue::Numeric(_) => ValueKind::Numeric,
            FactValue::Boolean(_) => ValueKind::Boolean,
            FactValue::Uri(_) => ValueKind::Uri,
        }
    }
}

/// One statement about a row's subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    /// Predicate as a prefixed name (e.g. `dcterms:title`)
    pub predicate: &'static str,
    pub value: FactValue,
}

impl Fact {
    pub fn new(predicate: &'static str, value: FactValue) -> Self {
        Self { predicate, value }
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}

// =============================================================================
// Row Classification
// =============================================================================

/// Why a row could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// ObjectID column is empty
    EmptyObjectId,
    /// ObjectID column contains something other than decimal digits
    NonNumericObjectId(String),
    /// Record does not have the fixed column count
    ColumnCount { found: usize },
    /// Record could not be decoded by the CSV reader
    Unreadable(String),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::EmptyObjectId => write!(f, "empty ObjectID"),
            MalformedReason::NonNumericObjectId(id) => {
                write!(f, "ObjectID '{}' is not numeric", id)
            }
            MalformedReason::ColumnCount { found } => {
                write!(f, "expected {} columns, found {}", COLUMN_COUNT, found)
            }
            MalformedReason::Unreadable(message) => write!(f, "unreadable record: {}", message),
        }
    }
}

/// Outcome of validating a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    /// The CSV header row; skipped silently
    Header,
    /// A row that gets a diagnostic instead of statements
    Malformed(MalformedReason),
    /// A row to extract and emit
    Valid,
}

impl RowClass {
    pub fn is_valid(&self) -> bool {
        matches!(self, RowClass::Valid)
    }
}
