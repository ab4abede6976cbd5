//! The textual diagnostic sink.
//!
//! The parser reports each error as one formatted line:
//!
//! ```text
//! [line 1:5] Error at '=': Expected variable name
//! ```
//!
//! The sink just collects those lines in order. Rendering beyond plain text
//! (source snippets, colors) is the consumer's business; the CLI does it
//! with `ariadne`.

use std::fmt;

/// An ordered collection of diagnostic lines, one per reported error.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    lines: Vec<String>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        DiagnosticSink { lines: Vec::new() }
    }

    /// Appends one diagnostic line.
    pub fn emit(&mut self, line: String) {
        self.lines.push(line);
    }

    /// The collected lines, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of collected lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
