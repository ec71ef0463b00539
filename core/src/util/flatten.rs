use geo::{Geometry, Point};

/// Trait to expand geometries into the points they consist of
///
/// # Examples
///
/// ```rust
/// use geo::{point, Geometry, MultiPoint};
/// use geodecode_core::util::flatten::FlattenPoints;
///
/// let p = Geometry::Point(point! { x: 30.0, y: 10.0 });
/// assert_eq!(p.flatten_points().unwrap(), vec![point! { x: 30.0, y: 10.0 }]);
///
/// let mp = Geometry::MultiPoint(MultiPoint::from(vec![(10.0, 40.0), (40.0, 30.0), (10.0, 40.0)]));
/// assert_eq!(
///     mp.flatten_points().unwrap(),
///     vec![
///         point! { x: 10.0, y: 40.0 },
///         point! { x: 40.0, y: 30.0 },
///         point! { x: 10.0, y: 40.0 },
///     ]
/// );
/// ```
///
/// ```rust
/// use geo::{Geometry, LineString};
/// use geodecode_core::util::flatten::FlattenPoints;
///
/// let ls = Geometry::LineString(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]));
/// assert_eq!(ls.flatten_points().unwrap_err(), "LineString");
/// ```
pub trait FlattenPoints {
    /// Returns the points of a point or a multi-point in their original
    /// order. For any other kind of geometry, the kind's name (see
    /// [`geometry_kind`]) is returned as the error.
    fn flatten_points(self) -> Result<Vec<Point>, &'static str>;
}

impl FlattenPoints for Geometry {
    fn flatten_points(self) -> Result<Vec<Point>, &'static str> {
        match self {
            Geometry::Point(p) => Ok(vec![p]),
            Geometry::MultiPoint(mp) => Ok(mp.0),
            other => Err(geometry_kind(&other)),
        }
    }
}

/// Returns the name of the given geometry's type
pub fn geometry_kind(geometry: &Geometry) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
