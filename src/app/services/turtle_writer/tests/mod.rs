//! Tests for the Turtle writer

pub mod writer_tests;

use crate::app::services::turtle_writer::TurtleWriter;

/// Create a writer over an in-memory buffer
pub fn create_buffer_writer() -> TurtleWriter<Vec<u8>> {
    TurtleWriter::new(Vec::new())
}

/// Finish a buffer writer and return its output as text
pub fn finish_to_string(writer: TurtleWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.finish().unwrap()).unwrap()
}
