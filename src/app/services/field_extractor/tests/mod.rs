//! Tests for the field extraction module

pub mod patterns_tests;

use crate::app::models::InputRow;

/// Create a row with the given free-text fields and fixed identifiers
pub fn create_test_row(artist_bio: &str, date: &str, dimensions: &str) -> InputRow {
    InputRow::from_fields([
        "Water Lilies",
        "Claude Monet",
        artist_bio,
        date,
        "Oil on canvas",
        dimensions,
        "Mrs. Simon Guggenheim Fund",
        "666.1959",
        "Painting",
        "Painting & Sculpture",
        "1959-10-13",
        "Y",
        "79802",
        "http://www.moma.org/collection/works/79802",
    ])
    .unwrap()
}
