use geo::Point;

/// A point decoded from an input line
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPoint {
    /// The decoded point
    point: Point,

    /// A verbatim copy of the input line the point was decoded from.
    /// [`None`] if carry-mode is disabled.
    payload: Option<String>,
}

impl DecodedPoint {
    pub fn new(point: Point, payload: Option<String>) -> Self {
        Self { point, payload }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn into_parts(self) -> (Point, Option<String>) {
        (self.point, self.payload)
    }
}

impl From<DecodedPoint> for Point {
    fn from(value: DecodedPoint) -> Self {
        value.point
    }
}
