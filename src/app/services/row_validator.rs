//! Row classification
//!
//! Decides per row whether it is the CSV header, a malformed record that
//! gets a diagnostic, or a valid record to convert. The header check runs
//! first so the header row is never reported as malformed.

use crate::app::models::{InputRow, MalformedReason, RowClass};
use crate::constants::HEADER_SENTINEL;

/// Classify a row as header, malformed or valid
pub fn classify(row: &InputRow) -> RowClass {
    if is_header(row) {
        return RowClass::Header;
    }

    match check_object_id(&row.object_id) {
        Some(reason) => RowClass::Malformed(reason),
        None => RowClass::Valid,
    }
}

/// Check whether the row is the header row
pub fn is_header(row: &InputRow) -> bool {
    row.moma_number == HEADER_SENTINEL
}

/// Check that an object id consists solely of decimal digits
fn check_object_id(object_id: &str) -> Option<MalformedReason> {
    if object_id.is_empty() {
        Some(MalformedReason::EmptyObjectId)
    } else if !object_id.bytes().all(|b| b.is_ascii_digit()) {
        Some(MalformedReason::NonNumericObjectId(object_id.to_string()))
    } else {
        None
    }
}
