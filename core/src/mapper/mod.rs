use std::{iter::FusedIterator, vec};

use geo::Point;
use tracing::{debug, event, trace_span, Level};

use crate::{
    error::DecodeError,
    format::FormatFamily,
    input::{delimited, GeoJsonReader, GeometryReader, WktReader},
    util::flatten::FlattenPoints,
};

pub use self::{config::MapperConfig, record::DecodedPoint};

pub mod config;
pub mod record;

/// Decodes input lines into points according to a [`MapperConfig`]
#[derive(Debug, Clone)]
pub struct FormatMapper {
    config: MapperConfig,
}

impl FormatMapper {
    pub fn new(config: MapperConfig) -> Self {
        debug!(
            format = %config.format(),
            start_offset = config.start_offset(),
            carry_input_data = config.carry_input_data(),
            "created format mapper"
        );
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Decodes all points from a single line. Delimited lines always yield
    /// exactly one point. WKT and GeoJSON lines yield one point per
    /// coordinate of a multi-point.
    pub fn decode_line(&self, line: &str) -> Result<Vec<DecodedPoint>, DecodeError> {
        let _span = trace_span!("decode_line", line).entered();

        let points = match self.config.format().family() {
            FormatFamily::Delimited(delimiter) => {
                let c = delimited::extract_from_line(line, delimiter, self.config.start_offset())
                    .map_err(|source| DecodeError::MalformedRecord {
                        line: line.to_string(),
                        source,
                    })?;
                vec![Point::from(c)]
            }
            FormatFamily::Wkt => Self::read_points(&WktReader, line)?,
            FormatFamily::GeoJson => Self::read_points(&GeoJsonReader, line)?,
        };

        Ok(points
            .into_iter()
            .map(|p| DecodedPoint::new(p, self.payload(line)))
            .collect())
    }

    /// Lazily decodes the given lines in order. See [`Decode`].
    pub fn decode<I>(&self, lines: I) -> Decode<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Decode {
            mapper: self.clone(),
            lines: lines.into_iter(),
            pending: Vec::new().into_iter(),
            lines_read: 0,
            failed: false,
        }
    }

    fn read_points(reader: &impl GeometryReader, line: &str) -> Result<Vec<Point>, DecodeError> {
        reader
            .read(line)?
            .flatten_points()
            .map_err(|kind| DecodeError::UnsupportedGeometryType {
                kind,
                line: line.to_string(),
            })
    }

    fn payload(&self, line: &str) -> Option<String> {
        self.config.carry_input_data().then(|| line.to_string())
    }
}

/// An iterator over the points decoded from a sequence of lines. Lines are
/// pulled one at a time, only when all points of the previous line have been
/// consumed. The first error is yielded once, after which the iterator ends
/// without pulling any further lines.
pub struct Decode<I> {
    mapper: FormatMapper,
    lines: I,

    /// Points of the current line that have not been yielded yet
    pending: vec::IntoIter<DecodedPoint>,

    /// Number of lines pulled from `lines`
    lines_read: usize,

    failed: bool,
}

impl<I> Decode<I> {
    /// Returns the number of input lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<I> Iterator for Decode<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<DecodedPoint, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.pending.next() {
                return Some(Ok(p));
            }
            if self.failed {
                return None;
            }

            let line = self.lines.next()?;
            self.lines_read += 1;
            match self.mapper.decode_line(line.as_ref()) {
                Ok(points) => self.pending = points.into_iter(),
                Err(error) => {
                    event!(
                        Level::DEBUG,
                        %error,
                        line_number = self.lines_read,
                        "failed to decode record",
                    );
                    self.failed = true;
                    return Some(Err(error));
                }
            }
        }
    }
}

impl<I> FusedIterator for Decode<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}
