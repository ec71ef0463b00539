use std::ops::Range;

use geodecode_core::{error::DecodeError, format::FormatTag};
use thiserror::Error;
use yansi::{Condition, Paint};

/// An input line that could not be decoded
#[derive(Error, Debug)]
pub enum DecodeFailure {
    #[error("{0}")]
    Decode(String),
}

/// Convert a [DecodeError] into a printable [DecodeFailure]
pub trait IntoDecodeFailure {
    fn into_decode_failure(self, line_number: usize, format: FormatTag) -> DecodeFailure;
}

/// Colors are only used when writing to a terminal that has not opted out
fn stderr_colors() -> Condition {
    Condition::from(|| {
        Condition::stderr_is_tty() && Condition::clicolor() && Condition::no_color()
    })
}

/// Returns the byte range of the field with the given `index`. If the line
/// has fewer fields, an empty range at the end of the line is returned.
fn field_span(line: &str, delimiter: char, index: usize) -> Range<usize> {
    let mut start = 0;
    for (i, field) in line.split(delimiter).enumerate() {
        let end = start + field.len();
        if i == index {
            return start..end;
        }
        start = end + delimiter.len_utf8();
    }
    line.len()..line.len()
}

/// Returns a message describing `err` and the part of the offending line it
/// refers to
fn describe(err: &DecodeError, format: FormatTag) -> (String, Range<usize>) {
    let whole_line = 0..err.line().len();
    match err {
        DecodeError::MalformedRecord { line, source } => {
            let span = match format.delimiter() {
                Some(d) => field_span(line, d, source.index()),
                None => whole_line,
            };
            (format!("Malformed record: {source}."), span)
        }
        DecodeError::GeometrySyntax { format, source, .. } => {
            (format!("Invalid {format} geometry: {source}."), whole_line)
        }
        DecodeError::UnsupportedGeometryType { kind, .. } => (
            format!("Unsupported geometry type `{kind}'. Expected Point or MultiPoint."),
            whole_line,
        ),
    }
}

/// Renders `err` as the offending line with the relevant part underlined and
/// the message attached to it. Styles apply only while `colors` holds.
fn render(err: &DecodeError, line_number: usize, format: FormatTag, colors: Condition) -> String {
    let line = err.line();
    let (msg, span) = describe(err, format);
    let before = &line[..span.start];
    let marked = &line[span.start..span.end];
    let after = &line[span.end..];

    let indent = " ".repeat(before.chars().count());
    let width = marked.chars().count();
    let left = width.saturating_sub(1) / 2;
    let right = width / 2;
    let underline = format!(
        "{}{}{}",
        "─".repeat(left),
        if width > 0 { "┬" } else { "│" },
        "─".repeat(right)
    );

    format!(
        "Unable to decode line {line_number}\n\n{before}{}{after}\n{indent}{}\n{indent}{}{}{}",
        marked.red().whenever(colors),
        underline.red().whenever(colors),
        " ".repeat(left),
        "╰── ".red().whenever(colors),
        msg.red().bold().whenever(colors),
    )
}

impl IntoDecodeFailure for DecodeError {
    fn into_decode_failure(self, line_number: usize, format: FormatTag) -> DecodeFailure {
        DecodeFailure::Decode(render(&self, line_number, format, stderr_colors()))
    }
}
