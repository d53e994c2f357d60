//! Extraction coverage tracking
//!
//! A rule that finds nothing in a blank field is uninteresting, but a rule
//! that finds nothing in a non-blank field points at a formatting convention
//! the pattern library does not know yet. These misses are counted per rule
//! and logged so new conventions can be spotted in the dataset.

use super::normalize_dimensions;
use super::patterns::Rule;
use crate::app::models::{ExtractedFacts, InputRow};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-rule counts of non-blank source fields that produced no value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionCoverage {
    /// Rows the extractor was applied to
    pub rows_examined: usize,
    /// Misses keyed by rule
    pub misses: BTreeMap<Rule, usize>,
}

impl ExtractionCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of extracting one row
    pub fn record(&mut self, row: &InputRow, facts: &ExtractedFacts) {
        self.rows_examined += 1;

        for rule in missed_rules(row, facts) {
            *self.misses.entry(rule).or_insert(0) += 1;
            debug!(
                "Rule {} found nothing in non-blank {} of object {}",
                rule,
                rule.source_column(),
                row.object_id
            );
        }
    }

    /// Number of misses for one rule
    pub fn misses_for(&self, rule: Rule) -> usize {
        self.misses.get(&rule).copied().unwrap_or(0)
    }

    /// Total misses across all rules
    pub fn total_misses(&self) -> usize {
        self.misses.values().sum()
    }
}

/// Rules whose source field was non-blank but yielded no value
pub fn missed_rules(row: &InputRow, facts: &ExtractedFacts) -> Vec<Rule> {
    let dimensions = normalize_dimensions(&row.dimensions);

    Rule::ALL
        .into_iter()
        .filter(|rule| {
            let (source, produced) = match rule {
                Rule::LifeDates => (row.artist_bio.as_str(), facts.birth_year.is_some()),
                Rule::Nationality => (
                    row.artist_bio.as_str(),
                    !facts.citizenship_countries.is_empty(),
                ),
                Rule::WorkDateRange => (row.date.as_str(), facts.work_finish_date.is_some()),
                Rule::MetricDimensions => (dimensions.as_ref(), facts.height_cm.is_some()),
                Rule::DimensionsNote => (dimensions.as_ref(), facts.dimensions_note.is_some()),
            };
            !source.trim().is_empty() && !produced
        })
        .collect()
}
