use std::fmt::{Display, Formatter};

use geo::BoundingRect;

use crate::circle::Circle;
use crate::config::{Config, Localized};
use crate::error::LatLongError;
use crate::geometry_type::GeometryType;
use crate::km::Km;
use crate::line_string::LineString;
use crate::multi_point::MultiPoint;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::rect::Rect;
use crate::region::Region;

/// Any of the supported geometries.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Single point.
    Point(Point),
    /// Set of points.
    MultiPoint(MultiPoint),
    /// Open path.
    LineString(LineString),
    /// Area bounded by one ring.
    Polygon(Polygon),
    /// Circle around a point.
    Circle(Circle),
}

impl Geometry {
    /// Type tag of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::Circle(_) => GeometryType::Circle,
        }
    }

    /// Single point standing for the whole geometry: the point itself, the first point of a multipoint, the
    /// centroid of a line or polygon, or the center of a circle.
    pub fn representative_point(&self) -> Result<Point, LatLongError> {
        match self {
            Geometry::Point(v) => Ok(*v),
            Geometry::MultiPoint(v) => v.first().copied(),
            Geometry::LineString(v) => v.centroid(),
            Geometry::Polygon(v) => v.centroid(),
            Geometry::Circle(v) => Ok(*v.center()),
        }
    }

    /// Region covered by the geometry. Multipoints have none.
    pub fn region(&self) -> Option<Region> {
        match self {
            Geometry::Point(v) => Some(v.region()),
            Geometry::MultiPoint(_) => None,
            Geometry::LineString(v) => Some(v.region()),
            Geometry::Polygon(v) => Some(v.region()),
            Geometry::Circle(v) => Some(v.region()),
        }
    }

    /// Radius of a circle. Other geometries and empty circles have none.
    pub fn radius(&self) -> Option<Km> {
        match self {
            Geometry::Circle(v) => v.radius(),
            _ => None,
        }
    }

    /// Smallest latitude/longitude rectangle containing the geometry. For a point this is its precision rectangle.
    pub fn bounding_rect(&self) -> Option<Rect> {
        match self {
            Geometry::Point(v) => Some(v.rect()),
            Geometry::MultiPoint(v) => geo_types::MultiPoint::from(v)
                .bounding_rect()
                .map(Rect::from),
            Geometry::LineString(v) => geo_types::LineString::from(v)
                .bounding_rect()
                .map(Rect::from),
            Geometry::Polygon(v) => geo_types::Polygon::from(v)
                .bounding_rect()
                .map(Rect::from),
            Geometry::Circle(v) => v.bounding_rect(),
        }
    }

    /// Human readable description using the given config.
    pub fn display<'a>(&'a self, config: &'a Config) -> Localized<'a, Geometry> {
        Localized::new(self, config)
    }
}

impl Display for Localized<'_, Geometry> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Geometry::Point(v) => v.display(self.config).fmt(f),
            Geometry::MultiPoint(v) => v.display(self.config).fmt(f),
            Geometry::LineString(v) => v.display(self.config).fmt(f),
            Geometry::Polygon(v) => v.display(self.config).fmt(f),
            Geometry::Circle(v) => v.display(self.config).fmt(f),
        }
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.display(&Config::default()).fmt(f)
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<Circle> for Geometry {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::from_degrees(0.0, 0.0, 1.0, 1.0),
            Point::from_degrees(0.0, 2.0, 1.0, 1.0),
            Point::from_degrees(2.0, 2.0, 1.0, 1.0),
            Point::from_degrees(2.0, 0.0, 1.0, 1.0),
            Point::from_degrees(0.0, 0.0, 1.0, 1.0),
        ])
    }

    #[test]
    fn representative_points() {
        let point = Point::from_degrees(35.0, 139.0, 0.1, 0.1);
        assert_eq!(Geometry::from(point).representative_point().unwrap(), point);
        assert_eq!(
            Geometry::from(Circle::new(point, Km(1.0)))
                .representative_point()
                .unwrap(),
            point
        );

        let other = Point::from_degrees(36.0, 139.0, 0.1, 0.1);
        let multi = Geometry::from(MultiPoint::new(vec![point, other]));
        assert_eq!(multi.representative_point().unwrap(), point);

        let centroid = Geometry::from(square()).representative_point().unwrap();
        assert_abs_diff_eq!(centroid.lat().degrees(), 1.0, epsilon = 1e-2);
        assert_abs_diff_eq!(centroid.lng().degrees(), 1.0, epsilon = 1e-9);

        assert_matches!(
            Geometry::from(MultiPoint::default()).representative_point(),
            Err(LatLongError::EmptyGeometry)
        );
        assert_matches!(
            Geometry::from(LineString::default()).representative_point(),
            Err(LatLongError::EmptyGeometry)
        );
    }

    #[test]
    fn regions() {
        let inside = Point::from_degrees(1.0, 1.0, 0.0, 0.0);
        let region = Geometry::from(square()).region().unwrap();
        assert!(region.contains_point(&inside));

        assert!(Geometry::from(MultiPoint::new(vec![inside])).region().is_none());
    }

    #[test]
    fn types_and_radius() {
        let point = Point::from_degrees(35.0, 139.0, 0.1, 0.1);
        let circle = Geometry::from(Circle::new(point, Km(5.0)));
        assert_eq!(circle.geometry_type(), GeometryType::Circle);
        assert_abs_diff_eq!(circle.radius().unwrap().value(), 5.0, epsilon = 1e-9);

        let point = Geometry::from(point);
        assert_eq!(point.geometry_type(), GeometryType::Point);
        assert_eq!(point.radius(), None);
        assert_eq!(Geometry::from(Circle::empty()).radius(), None);
    }

    #[test]
    fn bounding_rect() {
        let rect = Geometry::from(square()).bounding_rect().unwrap();
        assert_abs_diff_eq!(rect.lat_min(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.lng_max(), 2.0, epsilon = 1e-9);

        assert_eq!(Geometry::from(MultiPoint::default()).bounding_rect(), None);
    }

    #[test]
    fn display() {
        let ja = Config::new(crate::config::Lang::Ja);
        let point = Point::from_degrees(35.69, 139.71, 0.01, 0.01);
        assert_eq!(Geometry::from(point).display(&ja).to_string(), "北緯35.69度、東経139.71度");

        let line = Geometry::from(LineString::new(vec![point, point]));
        assert_eq!(line.to_string(), "lat.35.69N, long.139.71E,lat.35.69N, long.139.71E");
    }
}
