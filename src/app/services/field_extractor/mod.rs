//! Field extraction for collection free-text fields
//!
//! The collection CSV packs several atomic values into loosely formatted
//! text: artist biographies carry nationality and life dates, the date
//! column carries a year or a year range, and the dimensions column carries
//! imperial and metric measurements alongside qualifying notes. This module
//! pulls those values out with a fixed set of precompiled patterns.
//!
//! ## Architecture
//!
//! - [`patterns`] - The pattern library: one rule per target field
//! - [`extractor`] - Applies every rule to a row and assembles [`ExtractedFacts`]
//! - [`coverage`] - Tracks non-blank fields that a rule failed to match
//!
//! ## Usage
//!
//! ```rust
//! use moma_rdf::app::models::InputRow;
//! use moma_rdf::app::services::field_extractor::extract;
//!
//! let mut fields = vec![String::new(); 14];
//! fields[2] = "American, 1898–1976".to_string();
//! fields[3] = "1939-43".to_string();
//! let row = InputRow::from_fields(fields).unwrap();
//!
//! let facts = extract(&row);
//! assert_eq!(facts.birth_year.as_deref(), Some("1898"));
//! assert_eq!(facts.work_finish_date.as_deref(), Some("1943"));
//! ```
//!
//! [`ExtractedFacts`]: crate::app::models::ExtractedFacts

pub mod coverage;
pub mod extractor;
pub mod patterns;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use coverage::ExtractionCoverage;
pub use extractor::{extract, normalize_dimensions};
pub use patterns::Rule;
