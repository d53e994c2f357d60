//! Turtle serialization of converted collection rows
//!
//! The writer owns the output sink and knows the concrete syntax: prefix
//! declarations, the provenance comment block, one subject block per valid
//! row, and commented diagnostics for malformed rows. It has no knowledge
//! of the collection layout beyond the facts it is handed.
//!
//! - [`writer`] - The [`TurtleWriter`] over any `io::Write` sink
//! - [`diagnostics`] - Comment-safe rendering of malformed rows

pub mod diagnostics;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use diagnostics::raw_row_text;
pub use writer::TurtleWriter;
