//! Turtle document writer

use super::diagnostics::{comment_lines, raw_row_text};
use crate::app::models::{Fact, MalformedReason};
use crate::app::services::fact_emitter::{render_subject, render_value};
use crate::constants::{FACT_INDENT, PROVENANCE_LINES};
use crate::{Error, Result};
use std::io::Write;
use tracing::debug;

/// Writes prefixes, subject blocks and diagnostics to a sink
pub struct TurtleWriter<W: Write> {
    inner: W,
    blocks_written: usize,
    statements_written: usize,
    diagnostics_written: usize,
}

impl<W: Write> TurtleWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            blocks_written: 0,
            statements_written: 0,
            diagnostics_written: 0,
        }
    }

    /// Write `@prefix` declarations and, optionally, the provenance comments
    pub fn write_prologue<P, I>(&mut self, namespaces: I, include_provenance: bool) -> Result<()>
    where
        I: IntoIterator<Item = (P, P)>,
        P: AsRef<str>,
    {
        for (prefix, iri) in namespaces {
            writeln!(self.inner, "@prefix {}: <{}> .", prefix.as_ref(), iri.as_ref())
                .map_err(write_error)?;
        }
        writeln!(self.inner).map_err(write_error)?;

        if include_provenance {
            for line in PROVENANCE_LINES {
                writeln!(self.inner, "# {}", line).map_err(write_error)?;
            }
            writeln!(self.inner).map_err(write_error)?;
        }
        Ok(())
    }

    /// Write one subject block
    pub fn write_block(&mut self, subject_uri: &str, facts: &[Fact]) -> Result<()> {
        // Render first so a block is either written whole or not at all
        let mut block = render_subject(subject_uri);
        block.push('\n');
        for fact in facts {
            block.push_str(FACT_INDENT);
            block.push_str(fact.predicate);
            block.push(' ');
            block.push_str(&render_value(&fact.value));
            block.push_str(" ;\n");
        }
        block.push_str(".\n\n");

        self.inner
            .write_all(block.as_bytes())
            .map_err(write_error)?;
        self.blocks_written += 1;
        self.statements_written += facts.len();
        Ok(())
    }

    /// Write a commented diagnostic for a malformed row
    pub fn write_diagnostic<S: AsRef<str>>(
        &mut self,
        position: u64,
        reason: &MalformedReason,
        raw_fields: &[S],
    ) -> Result<()> {
        debug!("Writing diagnostic for record {}: {}", position, reason);

        let heading = format!("Skipped malformed row at record {} ({}):", position, reason);
        let mut text = comment_lines(&heading);
        text.push('\n');
        if !raw_fields.is_empty() {
            text.push_str(&comment_lines(&raw_row_text(raw_fields)?));
            text.push('\n');
        }
        text.push('\n');

        self.inner.write_all(text.as_bytes()).map_err(write_error)?;
        self.diagnostics_written += 1;
        Ok(())
    }

    /// Number of subject blocks written
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    /// Number of predicate-object statements written
    pub fn statements_written(&self) -> usize {
        self.statements_written
    }

    /// Number of diagnostic blocks written
    pub fn diagnostics_written(&self) -> usize {
        self.diagnostics_written
    }

    /// Flush and return the underlying sink
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().map_err(write_error)?;
        Ok(self.inner)
    }
}

fn write_error(error: std::io::Error) -> Error {
    Error::io("Failed to write Turtle output", error)
}
