//! Comment-safe rendering of malformed rows

use crate::{Error, Result};

/// Re-serialize raw fields as a single CSV record without the line terminator
///
/// Quoting follows the CSV rules so the diagnostic shows the row as it
/// would appear in the input file.
pub fn raw_row_text<S: AsRef<str>>(fields: &[S]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    writer
        .write_record(fields.iter().map(|field| field.as_ref()))
        .map_err(|e| Error::csv_parsing("<diagnostic>", "Failed to re-serialize row", Some(e)))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::io("Failed to flush diagnostic buffer", e.into_error()))?;

    let text = String::from_utf8_lossy(&bytes);
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

/// Prefix every line with a comment marker
///
/// A lone carriage return ends a line in Turtle, so it starts a new comment
/// line here as well.
pub fn comment_lines(text: &str) -> String {
    text.replace("\r\n", "\n")
        .split(['\r', '\n'])
        .map(|line| format!("# {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
