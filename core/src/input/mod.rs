use geo::Geometry;

use crate::error::DecodeError;

pub mod delimited;
pub mod geo_json;
pub mod wkt;

pub use self::{geo_json::GeoJsonReader, wkt::WktReader};

/// Parses a single text line into a geometry
pub trait GeometryReader {
    /// Reads the geometry encoded in `line`. Fails with
    /// [`DecodeError::GeometrySyntax`] if the line does not follow the
    /// reader's grammar.
    fn read(&self, line: &str) -> Result<Geometry, DecodeError>;
}
