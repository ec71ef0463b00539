use std::num::ParseFloatError;

use thiserror::Error;

use crate::format::FormatTag;

/// An error that happened while decoding a single input line. Decoding never
/// recovers from any of these: the line is rejected as a whole.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A delimited line has too few fields or a coordinate field is not a
    /// number
    #[error("malformed record {line:?}: {source}")]
    MalformedRecord {
        line: String,
        #[source]
        source: FieldError,
    },

    /// A WKT or GeoJSON line could not be parsed
    #[error("invalid {format} geometry {line:?}: {source}")]
    GeometrySyntax {
        format: FormatTag,
        line: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The line was parsed successfully but holds something other than a
    /// point or a multi-point
    #[error("unsupported geometry type `{kind}' in {line:?}, expected Point or MultiPoint")]
    UnsupportedGeometryType { kind: &'static str, line: String },
}

impl DecodeError {
    /// Returns the input line that could not be decoded
    pub fn line(&self) -> &str {
        match self {
            DecodeError::MalformedRecord { line, .. }
            | DecodeError::GeometrySyntax { line, .. }
            | DecodeError::UnsupportedGeometryType { line, .. } => line,
        }
    }
}

/// A coordinate field of a delimited record that could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The record ends before the field
    #[error("field {index} is missing, the record has only {count} field(s)")]
    Missing { index: usize, count: usize },

    /// The field's text is not a decimal number
    #[error("field {index} ({value:?}) is not a number")]
    NotANumber {
        index: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

impl FieldError {
    /// The zero-based index of the offending field
    pub fn index(&self) -> usize {
        match self {
            FieldError::Missing { index, .. } | FieldError::NotANumber { index, .. } => *index,
        }
    }
}

/// A format name did not match any known [`FormatTag`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown format `{name}'. Expected one of: {expected}")]
pub struct UnknownFormatError {
    pub name: String,
    pub expected: String,
}
