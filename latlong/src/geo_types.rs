//! Conversions between the crate types and [`geo_types`] geometries.
//!
//! `geo_types` geometries are planar with `x` for longitude and `y` for latitude, both in degrees. Precision and
//! altitude are dropped on the way there and come back as unknown.

use geo_types::{coord, Coord, LineString as GeoLineString, MultiPoint as GeoMultiPoint};

use crate::angle::Angle;
use crate::line_string::LineString;
use crate::multi_point::MultiPoint;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::rect::Rect;

pub(crate) fn coords(points: &[Point]) -> Vec<Coord<f64>> {
    points.iter().map(Coord::from).collect()
}

/// Planar polygon with the given exterior ring and no holes.
pub(crate) fn polygon_from_ring(ring: &[Point]) -> geo_types::Polygon<f64> {
    geo_types::Polygon::new(GeoLineString::new(coords(ring)), vec![])
}

impl From<&Point> for Coord<f64> {
    fn from(value: &Point) -> Self {
        coord!(x: value.lng().degrees(), y: value.lat().degrees())
    }
}

impl From<&Point> for geo_types::Point<f64> {
    fn from(value: &Point) -> Self {
        geo_types::Point(value.into())
    }
}

impl From<Coord<f64>> for Point {
    fn from(value: Coord<f64>) -> Self {
        Point::new(
            Angle::from_degrees(value.y, 0.0),
            Angle::from_degrees(value.x, 0.0),
            None,
        )
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        value.0.into()
    }
}

impl From<&MultiPoint> for GeoMultiPoint<f64> {
    fn from(value: &MultiPoint) -> Self {
        value.points().iter().map(geo_types::Point::from).collect()
    }
}

impl From<&LineString> for GeoLineString<f64> {
    fn from(value: &LineString) -> Self {
        GeoLineString::new(coords(value.points()))
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        polygon_from_ring(value.ring())
    }
}

impl From<geo_types::Rect<f64>> for Rect {
    fn from(value: geo_types::Rect<f64>) -> Self {
        Rect::from_bounds(value.min().y, value.max().y, value.min().x, value.max().x)
    }
}

impl From<&Rect> for geo_types::Rect<f64> {
    fn from(value: &Rect) -> Self {
        geo_types::Rect::new(
            coord!(x: value.lng_min(), y: value.lat_min()),
            coord!(x: value.lng_max(), y: value.lat_max()),
        )
    }
}
