//! Assembles extracted values for a collection row
//!
//! Each rule of the pattern library is applied to its own column. No rule
//! depends on another rule's outcome and nothing is carried between rows.

use super::patterns::{
    self, LifeDates, Nationality, WorkDateRange, match_dimensions_note, match_life_dates,
    match_metric_dimensions, match_nationality, match_work_date_range,
};
use crate::app::models::{ExtractedFacts, InputRow};
use std::borrow::Cow;

/// Multiplication sign used by some dimension strings in place of "x"
const MULTIPLICATION_SIGN: char = '×';

/// Extract every derived value from a row
pub fn extract(row: &InputRow) -> ExtractedFacts {
    let mut facts = ExtractedFacts::default();

    let LifeDates {
        birth_year,
        death_year,
    } = match_life_dates(&row.artist_bio);
    facts.birth_year = birth_year;
    facts.death_year = death_year;

    let Nationality {
        citizenship_country1,
        citizenship_country2,
        birth_country,
    } = match_nationality(&row.artist_bio);
    facts.citizenship_countries = citizenship_country1
        .into_iter()
        .chain(citizenship_country2)
        .collect();
    facts.birth_country = birth_country;

    if let Some(range) = match_work_date_range(&row.date) {
        let (start, finish) = resolve_work_dates(range);
        facts.work_start_date = start;
        facts.work_finish_date = Some(finish);
    }

    let dimensions = normalize_dimensions(&row.dimensions);
    if let Some(metric) = match_metric_dimensions(&dimensions) {
        // Height before width, based on the figures for Monet's "Water Lilies"
        facts.height_cm = metric.first;
        facts.width_cm = metric.second;
        facts.depth_cm = metric.third;
    }
    facts.dimensions_note = match_dimensions_note(&dimensions);

    facts
}

/// Replace the multiplication sign with "x" so both spellings match the metric rule
pub fn normalize_dimensions(dimensions: &str) -> Cow<'_, str> {
    if dimensions.contains(MULTIPLICATION_SIGN) {
        Cow::Owned(dimensions.replace(MULTIPLICATION_SIGN, "x"))
    } else {
        Cow::Borrowed(dimensions)
    }
}

/// Turn raw work date captures into (start, finish)
///
/// A single year is the finish date. For a range, a two-digit end year
/// borrows the century from the start year ("1939-43" -> 1943); any other
/// end year is kept as written.
fn resolve_work_dates(range: WorkDateRange) -> (Option<String>, String) {
    match range.end_year {
        None => (None, range.first_year),
        Some(end) => {
            let finish = expand_end_year(&range.first_year, &end);
            (Some(range.first_year), finish)
        }
    }
}

fn expand_end_year(start: &str, end: &str) -> String {
    if end.chars().count() != patterns::SHORT_YEAR_DIGITS {
        return end.to_string();
    }
    let century: String = start.chars().take(2).collect();
    century + end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_end_year() {
        assert_eq!(expand_end_year("1939", "43"), "1943");
        assert_eq!(expand_end_year("1880", "1910"), "1910");
        assert_eq!(expand_end_year("1998", "9"), "9");
        assert_eq!(expand_end_year("1880", "910"), "910");
        assert_eq!(expand_end_year("1880", "19105"), "19105");
    }

    #[test]
    fn test_resolve_single_year() {
        let range = WorkDateRange {
            first_year: "1935".to_string(),
            end_year: None,
        };
        assert_eq!(resolve_work_dates(range), (None, "1935".to_string()));
    }

    #[test]
    fn test_normalize_dimensions_borrows_when_unchanged() {
        assert!(matches!(
            normalize_dimensions("10 x 20 cm"),
            Cow::Borrowed("10 x 20 cm")
        ));
        assert_eq!(normalize_dimensions("10 × 20 cm"), "10 x 20 cm");
    }
}
