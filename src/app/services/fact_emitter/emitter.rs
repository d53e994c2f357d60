//! Ordered fact emission
//!
//! Facts are produced in a fixed order and never reordered or deduplicated.
//! The dimensions string is deliberately emitted twice, once as an extent
//! and once as the collection's own dimensions property. Blank values are
//! skipped; numeric zero is not blank.

use crate::app::models::{ExtractedFacts, Fact, FactValue, InputRow};
use crate::constants::{CURATOR_APPROVED_NO, CURATOR_APPROVED_YES, predicates};

/// Build the subject URI for an object id
pub fn subject_uri(subject_base: &str, object_id: &str) -> String {
    format!("{}{}", subject_base, object_id)
}

/// Produce the ordered facts for a valid row
pub fn emit(row: &InputRow, extracted: &ExtractedFacts) -> Vec<Fact> {
    let mut facts = FactList::default();

    // Original fields
    facts.string(predicates::EXTENT, &row.dimensions);
    facts.string(predicates::TITLE, &row.title);
    facts.string(predicates::ARTIST, &row.artist);
    facts.string(predicates::ARTIST_BIO, &row.artist_bio);
    facts.string(predicates::DATE, &row.date);
    facts.string(predicates::MEDIUM, &row.medium);
    facts.string(predicates::DIMENSIONS, &row.dimensions);
    facts.string(predicates::CREDIT_LINE, &row.credit_line);
    facts.string(predicates::MOMA_NUMBER, &row.moma_number);
    facts.string(predicates::CLASSIFICATION, &row.classification);
    facts.string(predicates::DEPARTMENT, &row.department);
    facts.date(predicates::DATE_ACQUIRED, &row.date_acquired);
    facts.boolean(predicates::CURATOR_APPROVED, &row.curator_approved);
    facts.string(predicates::OBJECT_ID, &row.object_id);
    facts.uri(predicates::URL, &row.url);

    // Derived fields
    facts.numeric(predicates::WIDTH_CM, extracted.width_cm);
    facts.numeric(predicates::HEIGHT_CM, extracted.height_cm);
    facts.numeric(predicates::DEPTH_CM, extracted.depth_cm);
    facts.optional_string(predicates::DIMENSIONS_NOTE, extracted.dimensions_note.as_deref());
    facts.optional_string(predicates::BIRTH_COUNTRY, extracted.birth_country.as_deref());
    facts.optional_string(
        predicates::CITIZENSHIP_COUNTRY,
        extracted.citizenship_country1(),
    );
    facts.optional_string(
        predicates::CITIZENSHIP_COUNTRY,
        extracted.citizenship_country2(),
    );
    facts.year(predicates::BIRTH_YEAR, extracted.birth_year.as_deref());
    facts.year(predicates::DEATH_YEAR, extracted.death_year.as_deref());
    facts.year(predicates::WORK_START_DATE, extracted.work_start_date.as_deref());
    facts.year(predicates::WORK_FINISH_DATE, extracted.work_finish_date.as_deref());

    facts.into_inner()
}

/// Accumulates facts, dropping blank values
#[derive(Default)]
struct FactList {
    facts: Vec<Fact>,
}

impl FactList {
    fn push(&mut self, predicate: &'static str, value: FactValue) {
        self.facts.push(Fact::new(predicate, value));
    }

    fn string(&mut self, predicate: &'static str, value: &str) {
        if !is_blank(value) {
            self.push(predicate, FactValue::String(value.to_string()));
        }
    }

    fn optional_string(&mut self, predicate: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.string(predicate, value);
        }
    }

    fn date(&mut self, predicate: &'static str, value: &str) {
        if !is_blank(value) {
            self.push(predicate, FactValue::Date(value.to_string()));
        }
    }

    fn boolean(&mut self, predicate: &'static str, value: &str) {
        let flag = match value {
            CURATOR_APPROVED_YES => true,
            CURATOR_APPROVED_NO => false,
            _ => return,
        };
        self.push(predicate, FactValue::Boolean(flag));
    }

    fn uri(&mut self, predicate: &'static str, value: &str) {
        if !is_blank(value) {
            self.push(predicate, FactValue::Uri(value.to_string()));
        }
    }

    fn numeric(&mut self, predicate: &'static str, value: Option<f64>) {
        if let Some(number) = value {
            self.push(predicate, FactValue::Numeric(number));
        }
    }

    /// Year strings are emitted as bare numbers
    fn year(&mut self, predicate: &'static str, value: Option<&str>) {
        if let Some(number) = value.and_then(|year| year.trim().parse::<f64>().ok()) {
            self.push(predicate, FactValue::Numeric(number));
        }
    }

    fn into_inner(self) -> Vec<Fact> {
        self.facts
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
