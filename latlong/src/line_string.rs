use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::config::{Config, Localized};
use crate::error::LatLongError;
use crate::multi_point::MultiPoint;
use crate::point::Point;
use crate::region::Region;
use crate::sphere::Polyline;

/// Open path through a sequence of points.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineString(MultiPoint);

impl LineString {
    /// Creates a new line string.
    pub fn new(points: Vec<Point>) -> Self {
        Self(MultiPoint::new(points))
    }

    /// Vertices of the line.
    pub fn points(&self) -> &[Point] {
        self.0.points()
    }

    /// Whether the line has no vertices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Great circle path through the vertices.
    pub fn region(&self) -> Region {
        Region::Polyline(Polyline::new(self.points()))
    }

    /// Centroid of the line. The precision of the result is unknown.
    pub fn centroid(&self) -> Result<Point, LatLongError> {
        self.region().centroid().ok_or(LatLongError::EmptyGeometry)
    }

    /// Human readable description using the given config.
    pub fn display<'a>(&'a self, config: &'a Config) -> Localized<'a, MultiPoint> {
        self.0.display(config)
    }
}

impl Display for LineString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<MultiPoint> for LineString {
    fn from(value: MultiPoint) -> Self {
        Self(value)
    }
}

impl From<Vec<Point>> for LineString {
    fn from(value: Vec<Point>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;

    fn sample() -> LineString {
        "+12+123/+12.3+123.4/+12.34+123.43/"
            .parse::<MultiPoint>()
            .unwrap()
            .into()
    }

    #[test]
    fn json() {
        let line = sample();
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, "[[123,12],[123.4,12.3],[123.43,12.34]]");
        assert_eq!(serde_json::from_str::<LineString>(&json).unwrap(), line);
    }

    #[test]
    fn centroid() {
        let line = LineString::new(vec![
            Point::from_degrees(0.0, 0.0, 0.1, 0.1),
            Point::from_degrees(0.0, 2.0, 0.1, 0.1),
        ]);
        let centroid = line.centroid().unwrap();
        assert_abs_diff_eq!(centroid.lat().degrees(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(centroid.lng().degrees(), 1.0, epsilon = 1e-9);
        assert_eq!(centroid.lat().precision_degrees(), 0.0);

        assert_matches!(LineString::default().centroid(), Err(LatLongError::EmptyGeometry));
    }

    #[test]
    fn contains_vertices() {
        let line = sample();
        assert!(line.region().contains_point(&line.points()[1]));
        assert!(!line.region().contains_point(&Point::from_degrees(0.0, 0.0, 0.0, 0.0)));
    }
}
