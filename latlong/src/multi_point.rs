use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{Config, Localized};
use crate::error::LatLongError;
use crate::point::Point;

/// Ordered sequence of points.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    /// Creates a new multipoint.
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Points of the multipoint.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the multipoint, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds a point to the end.
    pub fn push(&mut self, point: Point) {
        self.0.push(point);
    }

    /// First point, used to represent the whole multipoint.
    pub fn first(&self) -> Result<&Point, LatLongError> {
        self.0.first().ok_or(LatLongError::EmptyGeometry)
    }

    /// Collapses runs of adjacent points with the same coordinates into one point: the one with the smallest
    /// [`precision_area`](Point::precision_area), the later one on ties.
    ///
    /// ```
    /// use latlong::MultiPoint;
    ///
    /// let points: MultiPoint = "+35.69+139.71/+35.690+139.710/+35.7+139.7/".parse()?;
    /// let unique = points.uniq();
    /// assert_eq!(unique.len(), 2);
    /// assert_eq!(unique.points()[0].to_string(), "lat.35.690N, long.139.710E");
    /// # Ok::<(), latlong::LatLongError>(())
    /// ```
    pub fn uniq(&self) -> MultiPoint {
        let mut unique: Vec<Point> = Vec::with_capacity(self.0.len());
        for point in &self.0 {
            match unique.last_mut() {
                Some(last) if last.same_coordinate(point) => {
                    if point.precision_area() <= last.precision_area() {
                        *last = *point;
                    }
                }
                _ => unique.push(*point),
            }
        }

        Self(unique)
    }

    /// Formats the points as a `/`-separated ISO 6709 string.
    pub fn to_iso6709(&self) -> String {
        self.0.iter().map(Point::to_iso6709).collect()
    }

    /// Human readable description using the given config.
    pub fn display<'a>(&'a self, config: &'a Config) -> Localized<'a, MultiPoint> {
        Localized::new(self, config)
    }
}

impl Display for Localized<'_, MultiPoint> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, point) in self.value.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", point.display(self.config))?;
        }

        Ok(())
    }
}

impl Display for MultiPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.display(&Config::default()).fmt(f)
    }
}

impl FromStr for MultiPoint {
    type Err = LatLongError;

    /// Parses `/`-separated ISO 6709 points.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::iso6709::parse_points(s).map(Self)
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MultiPoint {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiPoint {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
