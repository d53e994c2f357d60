//! Tests for fact emission and rendering


use crate::app::models::{ExtractedFacts, InputRow};

/// Create a fully populated valid row
pub fn create_full_row() -> InputRow {
    InputRow::from_fields([
        "Rope and People, I",
        "Joan Miró",
        "(Spanish, 1893–1983)",
        "1935",
        "Oil on cardboard mounted on wood, with coil of rope",
        "41 1/4 x 29 3/8\" (104.8 x 74.6 cm)",
        "Gift of the Pierre Matisse Gallery",
        "25.1949",
        "Painting",
        "Painting & Sculpture",
        "1949-01-11",
        "Y",
        "78478",
        "http://www.moma.org/collection/works/78478",
    ])
    .unwrap()
}

/// Create a valid row with only the identifiers filled in
pub fn create_sparse_row(curator_approved: &str) -> InputRow {
    let mut fields = vec![String::new(); 14];
    fields[7] = "1.2000".to_string();
    fields[11] = curator_approved.to_string();
    fields[12] = "42".to_string();
    InputRow::from_fields(fields).unwrap()
}

/// Extracted values with every field populated
pub fn create_full_extraction() -> ExtractedFacts {
    ExtractedFacts {
        birth_year: Some("1893".to_string()),
        death_year: Some("1983".to_string()),
        citizenship_countries: vec!["Spanish".to_string(), "French".to_string()],
        birth_country: Some("Spain".to_string()),
        work_start_date: Some("1934".to_string()),
        work_finish_date: Some("1935".to_string()),
        height_cm: Some(104.8),
        width_cm: Some(74.6),
        depth_cm: Some(0.0),
        dimensions_note: Some("Overall".to_string()),
    }
}
