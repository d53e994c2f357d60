//! Turtle term rendering for fact values

use crate::app::models::FactValue;
use crate::constants::DATE_DATATYPE;

/// Render a fact value as a Turtle object term
pub fn render_value(value: &FactValue) -> String {
    match value {
        FactValue::String(text) => escape_string(text),
        FactValue::Date(date) => format!("\"{}\"^^{}", date, DATE_DATATYPE),
        FactValue::Numeric(number) => render_number(*number),
        FactValue::Boolean(flag) => flag.to_string(),
        FactValue::Uri(uri) => format!("<{}>", uri),
    }
}

/// Render a subject URI reference
pub fn render_subject(uri: &str) -> String {
    format!("<{}>", uri)
}

/// Render a number without a fractional part when it is integral
fn render_number(number: f64) -> String {
    // f64 Display already prints 121.0 as "121" and 60.8 as "60.8"
    number.to_string()
}

/// Quote a string literal
///
/// Surrounding whitespace is trimmed and each line break becomes a single
/// space. Backslashes are escaped before quotes so the inserted escape
/// characters are not escaped again.
pub fn escape_string(text: &str) -> String {
    let flattened = text.trim().replace("\r\n", " ").replace(['\n', '\r'], " ");
    let escaped = flattened.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
