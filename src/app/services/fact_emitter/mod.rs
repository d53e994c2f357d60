//! Fact emission for valid collection rows
//!
//! Turns a validated row and its extracted values into the ordered
//! sequence of typed facts that make up the row's subject block, and
//! renders each value according to its kind.
//!
//! - [`emitter`] - Fixed fact order and presence rules
//! - [`rendering`] - Per-kind Turtle term rendering and string escaping

pub mod emitter;
pub mod rendering;

#[cfg(test)]
pub mod tests;

pub use emitter::{emit, subject_uri};
pub use rendering::{escape_string, render_subject, render_value};
