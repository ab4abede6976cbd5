//! Rich diagnostic rendering for the CLI.
//!
//! The first parse error gets a full `ariadne` report with a source snippet;
//! any further diagnostics print as the parser's plain sink lines. If the
//! report cannot be rendered the plain line is used as a fallback.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use zen::parser::{ParseError, ParseResult};

/// Renders every diagnostic of a failed parse to stderr.
pub(crate) fn render(filename: &str, source: &str, result: &ParseResult) {
    match result.first_error.as_ref() {
        Some(error) => {
            if print_report(filename, source, error).is_err() {
                eprintln!("{}", error);
            }
            for line in result.sink.lines().iter().skip(1) {
                eprintln!("{}", line);
            }
        }
        None => {
            for line in result.sink.lines() {
                eprintln!("{}", line);
            }
        }
    }
}

fn print_report(filename: &str, source: &str, error: &ParseError) -> std::io::Result<()> {
    let range = byte_range(source, error.line(), error.column());
    Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(error.short_message())
        .with_label(
            Label::new((filename, range))
                .with_message(error.message())
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Recovers a one-byte range from a 1-based line/column position.
///
/// Parse errors carry line/column only; `ariadne` wants byte offsets, so
/// walk the lines back to an offset. Positions past the end clamp to the
/// end of the source.
fn byte_range(source: &str, line: u32, column: u32) -> Range<usize> {
    let mut offset = 0usize;
    for (number, text) in source.split('\n').enumerate() {
        if number + 1 == line as usize {
            let start = (offset + (column as usize).saturating_sub(1)).min(source.len());
            let end = (start + 1).min(source.len()).max(start);
            return start..end;
        }
        offset += text.len() + 1;
    }
    source.len()..source.len()
}
