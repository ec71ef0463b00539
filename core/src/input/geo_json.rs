use std::str::FromStr;

use geo::Geometry;
use geojson::GeoJson;

use crate::{error::DecodeError, format::FormatTag, input::GeometryReader};

/// Reads geometries from GeoJSON. A line may either contain a geometry
/// object or a single feature. In the latter case, the feature's geometry is
/// returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoJsonReader;

impl GeoJsonReader {
    fn syntax_error(
        line: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> DecodeError {
        DecodeError::GeometrySyntax {
            format: FormatTag::GeoJson,
            line: line.to_string(),
            source: source.into(),
        }
    }
}

impl GeometryReader for GeoJsonReader {
    fn read(&self, line: &str) -> Result<Geometry, DecodeError> {
        let geometry = match GeoJson::from_str(line).map_err(|e| Self::syntax_error(line, e))? {
            GeoJson::Geometry(g) => g,
            GeoJson::Feature(f) => f
                .geometry
                .ok_or_else(|| Self::syntax_error(line, "feature has no geometry"))?,
            GeoJson::FeatureCollection(_) => {
                return Err(DecodeError::UnsupportedGeometryType {
                    kind: "FeatureCollection",
                    line: line.to_string(),
                })
            }
        };

        Geometry::try_from(geometry).map_err(|e| Self::syntax_error(line, e))
    }
}
