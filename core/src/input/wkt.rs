use std::str::FromStr;

use geo::Geometry;
use wkt::Wkt;

use crate::{error::DecodeError, format::FormatTag, input::GeometryReader};

/// Reads geometries from Well-Known Text. Z and M ordinates are accepted but
/// dropped, since `geo` geometries are two-dimensional.
#[derive(Debug, Default, Clone, Copy)]
pub struct WktReader;

impl WktReader {
    fn syntax_error(
        line: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> DecodeError {
        DecodeError::GeometrySyntax {
            format: FormatTag::Wkt,
            line: line.to_string(),
            source: source.into(),
        }
    }
}

/// Returns the text following the geometry in `text` or [`None`] if the
/// geometry extends to the end. Expects `text` to start with a geometry that
/// has already been parsed successfully.
fn trailing_text(text: &str) -> Option<&str> {
    let end = match text.find('(') {
        Some(open) => {
            let mut depth = 0usize;
            let mut end = None;
            for (i, c) in text[open..].char_indices() {
                match c {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            end = Some(open + i + 1);
                            break;
                        }
                    }
                    _ => {}
                }
            }
            end?
        }

        // `<TYPE> [Z|M|ZM] EMPTY`
        None => text.to_ascii_uppercase().find("EMPTY")? + "EMPTY".len(),
    };

    let rest = text[end..].trim();
    (!rest.is_empty()).then_some(rest)
}

impl GeometryReader for WktReader {
    fn read(&self, line: &str) -> Result<Geometry, DecodeError> {
        let text = line.trim();
        let wkt = Wkt::<f64>::from_str(text).map_err(|e| Self::syntax_error(line, e.to_string()))?;

        // the parser stops after the geometry and ignores whatever follows
        if let Some(rest) = trailing_text(text) {
            return Err(Self::syntax_error(
                line,
                format!("unexpected text {rest:?} after geometry"),
            ));
        }

        let is_point = matches!(wkt, Wkt::Point(_));
        let geometry =
            Geometry::try_from(wkt).map_err(|e| Self::syntax_error(line, e.to_string()))?;

        // an empty point has no `geo` counterpart and converts to an empty
        // multi-point, which would silently yield no points at all
        if is_point && !matches!(geometry, Geometry::Point(_)) {
            return Err(Self::syntax_error(line, "a point must not be empty"));
        }

        Ok(geometry)
    }
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, EqualityAssertion};
    use geo::{point, Geometry, LineString, MultiPoint};

    use crate::{error::DecodeError, input::GeometryReader};

    use super::{trailing_text, WktReader};

    #[test]
    fn point() {
        let g = WktReader.read("POINT (30 10)").unwrap();
        assert_that!(g).is_equal_to(Geometry::Point(point! { x: 30.0, y: 10.0 }));
    }

    #[test]
    fn multi_point() {
        let g = WktReader.read("MULTIPOINT (10 40, 40 30)").unwrap();
        let expected = MultiPoint::from(vec![(10.0, 40.0), (40.0, 30.0)]);
        assert_that!(g).is_equal_to(Geometry::MultiPoint(expected));
    }

    /// Other geometry types are parsed, rejecting them is up to the caller
    #[test]
    fn line_string() {
        let g = WktReader.read("LINESTRING (0 0, 1 1)").unwrap();
        let expected = LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_that!(g).is_equal_to(Geometry::LineString(expected));
    }

    /// Z and M ordinates are dropped
    #[test]
    fn third_and_fourth_dimension() {
        let g = WktReader.read("POINT Z (1 2 3)").unwrap();
        assert_that!(g).is_equal_to(Geometry::Point(point! { x: 1.0, y: 2.0 }));

        let g = WktReader.read("POINT ZM (1 2 3 4)").unwrap();
        assert_that!(g).is_equal_to(Geometry::Point(point! { x: 1.0, y: 2.0 }));
    }

    #[test]
    fn syntax_error() {
        let err = WktReader.read("POINT (abc)").unwrap_err();
        assert!(matches!(err, DecodeError::GeometrySyntax { .. }));
        assert_that!(err.line()).is_equal_to("POINT (abc)");
    }

    #[test]
    fn empty_point() {
        let err = WktReader.read("POINT EMPTY").unwrap_err();
        assert!(matches!(err, DecodeError::GeometrySyntax { .. }));
        assert_that!(err.line()).is_equal_to("POINT EMPTY");
    }

    #[test]
    fn empty_multi_point() {
        let g = WktReader.read("MULTIPOINT EMPTY").unwrap();
        assert_that!(g).is_equal_to(Geometry::MultiPoint(MultiPoint::<f64>(vec![])));
    }

    #[test]
    fn trailing_garbage() {
        let err = WktReader.read("POINT (1 2) trailing").unwrap_err();
        assert!(matches!(err, DecodeError::GeometrySyntax { .. }));

        let err = WktReader.read("MULTIPOINT EMPTY x").unwrap_err();
        assert!(matches!(err, DecodeError::GeometrySyntax { .. }));

        // surrounding whitespace is fine
        assert!(WktReader.read("  POINT (1 2)  ").is_ok());
    }

    #[test]
    fn end_of_geometry() {
        assert_that!(trailing_text("POINT (1 2)")).is_equal_to(None);
        assert_that!(trailing_text("MULTIPOINT ((1 2), (3 4)) ; x")).is_equal_to(Some("; x"));
        assert_that!(trailing_text("GEOMETRYCOLLECTION (POINT EMPTY) y")).is_equal_to(Some("y"));
        assert_that!(trailing_text("point empty")).is_equal_to(None);
        assert_that!(trailing_text("POINT EMPTY 1")).is_equal_to(Some("1"));
    }
}
