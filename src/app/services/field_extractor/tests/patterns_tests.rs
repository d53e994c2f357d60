//! Tests for the pattern library rules

use crate::app::services::field_extractor::patterns::*;

#[test]
fn test_life_dates_birth_only() {
    let dates = match_life_dates("American, born 1898");
    assert_eq!(dates.birth_year.as_deref(), Some("1898"));
    assert_eq!(dates.death_year, None);
}

#[test]
fn test_life_dates_range_with_parentheses() {
    let dates = match_life_dates("(American, 1898–1976)");
    assert_eq!(dates.birth_year.as_deref(), Some("1898"));
    assert_eq!(dates.death_year.as_deref(), Some("1976"));
}

#[test]
fn test_life_dates_after_birth_place() {
    let dates = match_life_dates("French and Swiss, born Switzerland 1944");
    assert_eq!(dates.birth_year.as_deref(), Some("1944"));
    assert_eq!(dates.death_year, None);
}

#[test]
fn test_life_dates_hyphen_is_not_a_range() {
    // Only the en dash separates life dates
    let dates = match_life_dates("Japanese, 1920-2000");
    assert_eq!(dates.birth_year.as_deref(), Some("1920"));
    assert_eq!(dates.death_year, None);
}

#[test]
fn test_life_dates_only_last_token_considered() {
    // The greedy lead skips years that are not in the final token group
    let dates = match_life_dates("American, 1898–1976 active");
    assert_eq!(dates, LifeDates::default());
}

#[test]
fn test_life_dates_no_match() {
    assert_eq!(match_life_dates("American"), LifeDates::default());
    assert_eq!(match_life_dates(""), LifeDates::default());
}

#[test]
fn test_nationality_single() {
    let nationality = match_nationality("American, born 1898");
    assert_eq!(nationality.citizenship_country1.as_deref(), Some("American"));
    assert_eq!(nationality.citizenship_country2, None);
    assert_eq!(nationality.birth_country, None);
}

#[test]
fn test_nationality_dual_with_birth_place() {
    let nationality = match_nationality("French and Swiss, born Switzerland 1944");
    assert_eq!(nationality.citizenship_country1.as_deref(), Some("French"));
    assert_eq!(nationality.citizenship_country2.as_deref(), Some("Swiss"));
    assert_eq!(nationality.birth_country.as_deref(), Some("Switzerland"));
}

#[test]
fn test_nationality_skips_leading_parenthesis() {
    let nationality = match_nationality("(German, born Poland. 1900–1980)");
    assert_eq!(nationality.citizenship_country1.as_deref(), Some("German"));
    assert_eq!(nationality.birth_country.as_deref(), Some("Poland"));
}

#[test]
fn test_nationality_no_match() {
    assert_eq!(match_nationality(""), Nationality::default());
    assert_eq!(match_nationality("(), –"), Nationality::default());
}

#[test]
fn test_work_date_single_year() {
    let range = match_work_date_range("1935").unwrap();
    assert_eq!(range.first_year, "1935");
    assert_eq!(range.end_year, None);
}

#[test]
fn test_work_date_truncated_range() {
    let range = match_work_date_range("1939-43").unwrap();
    assert_eq!(range.first_year, "1939");
    assert_eq!(range.end_year.as_deref(), Some("43"));
}

#[test]
fn test_work_date_full_range() {
    let range = match_work_date_range("1880-1910").unwrap();
    assert_eq!(range.first_year, "1880");
    assert_eq!(range.end_year.as_deref(), Some("1910"));
}

#[test]
fn test_work_date_long_end_year_kept_whole() {
    let range = match_work_date_range("1880-19105").unwrap();
    assert_eq!(range.end_year.as_deref(), Some("19105"));
}

#[test]
fn test_work_date_embedded_year() {
    let range = match_work_date_range("c. 1950, printed 1972").unwrap();
    assert_eq!(range.first_year, "1950");
    assert_eq!(range.end_year, None);
}

#[test]
fn test_work_date_no_match() {
    assert!(match_work_date_range("n.d.").is_none());
    assert!(match_work_date_range("").is_none());
}

#[test]
fn test_metric_dimensions_two_figures() {
    let metric = match_metric_dimensions("23 15/16 x 17 15/16\" (60.8 x 45.6 cm)").unwrap();
    assert_eq!(metric.first, Some(60.8));
    assert_eq!(metric.second, Some(45.6));
    assert_eq!(metric.third, None);
}

#[test]
fn test_metric_dimensions_three_figures() {
    let metric =
        match_metric_dimensions("5/8 x 36 1/2 x 1 1/2\" (121 x 92.7 x 3.8 cm)").unwrap();
    assert_eq!(metric.first, Some(121.0));
    assert_eq!(metric.second, Some(92.7));
    assert_eq!(metric.third, Some(3.8));
}

#[test]
fn test_metric_dimensions_no_match() {
    assert!(match_metric_dimensions("23 15/16 x 17 15/16\"").is_none());
    assert!(match_metric_dimensions("Dimensions variable").is_none());
}

#[test]
fn test_dimensions_note_single_word() {
    assert_eq!(
        match_dimensions_note("Each 10 x 5 cm").as_deref(),
        Some("Each")
    );
}

#[test]
fn test_dimensions_note_spans_words() {
    assert_eq!(
        match_dimensions_note("Overall (unfolded): 12 x 30 cm").as_deref(),
        Some("Overall (unfolded):")
    );
}

#[test]
fn test_dimensions_note_ignores_short_fragments() {
    assert_eq!(
        match_dimensions_note("23 15/16 x 17 15/16\" (60.8 x 45.6 cm)"),
        None
    );
}

#[test]
fn test_rule_metadata() {
    assert_eq!(Rule::ALL.len(), 5);
    assert_eq!(Rule::LifeDates.source_column(), "ArtistBio");
    assert_eq!(Rule::WorkDateRange.source_column(), "Date");
    assert_eq!(Rule::DimensionsNote.to_string(), "dimensions-note");
}
