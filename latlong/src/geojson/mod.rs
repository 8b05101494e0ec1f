//! GeoJSON wire form of the geometries: `{"type": ..., "coordinates": ..., "radius": ...}`.
//!
//! `radius` (in km) is only written for circles. A missing geometry is written with the `Null` type.
//!
//! ```
//! use latlong::geojson::GeoJsonGeometry;
//! use latlong::{Geometry, MultiPoint};
//!
//! let points: MultiPoint = "+12.34+123.45+3776/+0123.4-01234.5-3776/".parse()?;
//! let json = serde_json::to_string(&GeoJsonGeometry::from(Geometry::from(points)))?;
//! assert_eq!(json, r#"{"type":"MultiPoint","coordinates":[[123.45,12.34,3776],[-12.575,1.390,-3776]]}"#);
//!
//! let geometry = GeoJsonGeometry::from_json(&json)?;
//! assert!(matches!(geometry.geometry(), Some(Geometry::MultiPoint(_))));
//! # Ok::<(), latlong::LatLongError>(())
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::circle::Circle;
use crate::error::LatLongError;
use crate::geometry::Geometry;
use crate::geometry_type::GeometryType;
use crate::km::Km;
use crate::line_string::LineString;
use crate::multi_point::MultiPoint;
use crate::point::Point;
use crate::polygon::Polygon;

mod feature;
pub use feature::*;

/// Geometry member of a GeoJSON object. `None` stands for the `Null` geometry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeoJsonGeometry(Option<Geometry>);

impl GeoJsonGeometry {
    /// Wraps a geometry.
    pub fn new(geometry: Option<Geometry>) -> Self {
        Self(geometry)
    }

    /// The wrapped geometry.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.0.as_ref()
    }

    /// Consumes the envelope, returning the geometry.
    pub fn into_geometry(self) -> Option<Geometry> {
        self.0
    }

    /// Type tag written to the `type` member.
    pub fn geometry_type(&self) -> GeometryType {
        self.0
            .as_ref()
            .map_or(GeometryType::Null, Geometry::geometry_type)
    }

    /// Parses a GeoJSON geometry object.
    ///
    /// Unlike going through [`Deserialize`], this keeps the specific [`LatLongError`] variant of shape errors.
    pub fn from_json(json: &str) -> Result<Self, LatLongError> {
        let envelope: Envelope = serde_json::from_str(json)?;
        Self::try_from(envelope)
    }
}

impl From<Geometry> for GeoJsonGeometry {
    fn from(value: Geometry) -> Self {
        Self(Some(value))
    }
}

impl From<Option<Geometry>> for GeoJsonGeometry {
    fn from(value: Option<Geometry>) -> Self {
        Self(value)
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Coordinates<'a> {
    Null,
    Position(&'a Point),
    Positions(&'a MultiPoint),
    Line(&'a LineString),
    Rings(&'a Polygon),
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    #[serde(rename = "type")]
    geometry_type: GeometryType,
    coordinates: Coordinates<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    radius: Option<Km>,
}

impl Serialize for GeoJsonGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let coordinates = match &self.0 {
            None => Coordinates::Null,
            Some(Geometry::Point(v)) => Coordinates::Position(v),
            Some(Geometry::MultiPoint(v)) => Coordinates::Positions(v),
            Some(Geometry::LineString(v)) => Coordinates::Line(v),
            Some(Geometry::Polygon(v)) => Coordinates::Rings(v),
            Some(Geometry::Circle(v)) => Coordinates::Position(v.center()),
        };

        EnvelopeRef {
            geometry_type: self.geometry_type(),
            coordinates,
            radius: self.0.as_ref().and_then(Geometry::radius),
        }
        .serialize(serializer)
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    geometry_type: String,
    #[serde(default)]
    coordinates: Option<Value>,
    #[serde(default)]
    radius: Option<f64>,
}

impl<'de> Deserialize<'de> for GeoJsonGeometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::deserialize(deserializer)?;
        Self::try_from(envelope).map_err(D::Error::custom)
    }
}

impl TryFrom<Envelope> for GeoJsonGeometry {
    type Error = LatLongError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        let geometry_type: GeometryType = envelope.geometry_type.parse()?;
        if geometry_type == GeometryType::Null {
            return Ok(Self(None));
        }

        let coordinates = envelope.coordinates.ok_or_else(|| {
            LatLongError::InvalidCoordinates(format!("{geometry_type} without coordinates"))
        })?;

        let geometry = match geometry_type {
            GeometryType::Point => Geometry::Point(position(coordinates)?),
            GeometryType::MultiPoint => Geometry::MultiPoint(positions(coordinates)?.into()),
            GeometryType::LineString => Geometry::LineString(positions(coordinates)?.into()),
            GeometryType::Polygon => Geometry::Polygon(Polygon::from_rings(
                elements(coordinates)?
                    .into_iter()
                    .map(positions)
                    .collect::<Result<_, _>>()?,
            )?),
            GeometryType::Circle => {
                let center = position(coordinates)?;
                match envelope.radius {
                    Some(radius) => Geometry::Circle(Circle::new(center, Km(radius))),
                    None => Geometry::Circle(Circle::without_radius(center)),
                }
            }
            GeometryType::Null => return Ok(Self(None)),
        };

        Ok(Self(Some(geometry)))
    }
}

fn elements(value: Value) -> Result<Vec<Value>, LatLongError> {
    match value {
        Value::Array(values) => Ok(values),
        other => Err(LatLongError::InvalidCoordinates(format!(
            "expected an array, got {other}"
        ))),
    }
}

fn position(value: Value) -> Result<Point, LatLongError> {
    let numbers = elements(value)?
        .into_iter()
        .map(|v| match v {
            Value::Number(n) => Ok(n),
            other => Err(LatLongError::InvalidCoordinates(format!(
                "expected a number, got {other}"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Point::try_from(numbers.as_slice())
}

fn positions(value: Value) -> Result<Vec<Point>, LatLongError> {
    elements(value)?.into_iter().map(position).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn multi_point() {
        let points: MultiPoint = "+12.34+123.45+3776/+0123.4-01234.5-3776/-001234+0012345-12345/"
            .parse()
            .unwrap();
        let geometry = GeoJsonGeometry::from(Geometry::from(points.clone()));
        let json = serde_json::to_string(&geometry).unwrap();
        assert_eq!(
            json,
            r#"{"type":"MultiPoint","coordinates":[[123.45,12.34,3776],[-12.575,1.390,-3776],[1.3958,-0.2094,-12345]]}"#
        );

        let decoded: GeoJsonGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(
            decoded.geometry().unwrap().to_string(),
            Geometry::from(points).to_string()
        );
    }

    #[test]
    fn point() {
        let json = r#"{"type":"Point","coordinates":[139.71,35.69]}"#;
        let geometry = GeoJsonGeometry::from_json(json).unwrap();
        assert_eq!(
            geometry.geometry(),
            Some(&Geometry::Point(Point::from_degrees(35.69, 139.71, 0.01, 0.01)))
        );
        assert_eq!(serde_json::to_string(&geometry).unwrap(), json);
    }

    #[test]
    fn line_string() {
        let json = r#"{"type":"LineString","coordinates":[[123,12],[123.4,12.3],[123.43,12.34]]}"#;
        let geometry = GeoJsonGeometry::from_json(json).unwrap();
        assert_matches!(geometry.geometry(), Some(Geometry::LineString(line)) if line.points().len() == 3);
        assert_eq!(serde_json::to_string(&geometry).unwrap(), json);
    }

    #[test]
    fn polygon() {
        let json = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#;
        let geometry = GeoJsonGeometry::from_json(json).unwrap();
        assert_matches!(geometry.geometry(), Some(Geometry::Polygon(p)) if p.ring().len() == 4);
        assert_eq!(serde_json::to_string(&geometry).unwrap(), json);

        // Clockwise input comes back counterclockwise.
        let geometry =
            GeoJsonGeometry::from_json(r#"{"type":"Polygon","coordinates":[[[0,0],[1,1],[1,0],[0,0]]]}"#)
                .unwrap();
        assert_eq!(serde_json::to_string(&geometry).unwrap(), json);
    }

    #[test]
    fn polygon_with_holes() {
        let json = r#"{"type":"Polygon","coordinates":[[[0,0],[9,0],[9,9],[0,0]],[[1,1],[2,1],[2,2],[1,1]]]}"#;
        assert_matches!(
            GeoJsonGeometry::from_json(json),
            Err(LatLongError::UnsupportedShape(_))
        );
        assert!(serde_json::from_str::<GeoJsonGeometry>(json).is_err());
    }

    #[test]
    fn circle() {
        let json = r#"{"type":"Circle","coordinates":[139.00,35.00],"radius":100}"#;
        let geometry = GeoJsonGeometry::from_json(json).unwrap();
        let Some(Geometry::Circle(circle)) = geometry.geometry() else {
            panic!("expected a circle, got {geometry:?}");
        };
        assert_abs_diff_eq!(circle.radius().unwrap().value(), 100.0, epsilon = 1e-9);
        assert_eq!(circle.center().to_string(), "lat.35.00N, long.139.00E");

        assert_eq!(serde_json::to_string(&geometry).unwrap(), json);
    }

    #[test]
    fn circle_round_trip() {
        let center = Point::from_degrees(35.69, 139.71, 0.01, 0.01);
        let geometry = GeoJsonGeometry::from(Geometry::from(Circle::new(center, Km(7.3))));

        let json = serde_json::to_string(&geometry).unwrap();
        assert_eq!(json, r#"{"type":"Circle","coordinates":[139.71,35.69],"radius":7.3}"#);
        assert_eq!(GeoJsonGeometry::from_json(&json).unwrap(), geometry);
        assert_eq!(serde_json::from_str::<GeoJsonGeometry>(&json).unwrap(), geometry);
    }

    #[test]
    fn circle_without_radius() {
        let json = r#"{"type":"Circle","coordinates":[139,35]}"#;
        let geometry = GeoJsonGeometry::from_json(json).unwrap();
        let Some(Geometry::Circle(circle)) = geometry.geometry() else {
            panic!("expected a circle, got {geometry:?}");
        };
        assert!(circle.is_empty());
        assert_eq!(circle.center().to_string(), "lat.35N, long.139E");
        assert_eq!(serde_json::to_string(&geometry).unwrap(), json);
    }

    #[test]
    fn null() {
        let geometry = GeoJsonGeometry::from_json(r#"{"type":"Null"}"#).unwrap();
        assert_eq!(geometry, GeoJsonGeometry::default());
        assert_eq!(
            serde_json::to_string(&geometry).unwrap(),
            r#"{"type":"Null","coordinates":null}"#
        );
    }

    #[test]
    fn errors() {
        assert_matches!(
            GeoJsonGeometry::from_json(r#"{"type":"MultiPolygon","coordinates":[]}"#),
            Err(LatLongError::UnknownGeometryType(name)) if name == "MultiPolygon"
        );
        assert_matches!(
            GeoJsonGeometry::from_json(r#"{"type":"Point","coordinates":[139.71]}"#),
            Err(LatLongError::InvalidCoordinates(_))
        );
        assert_matches!(
            GeoJsonGeometry::from_json(r#"{"type":"Point"}"#),
            Err(LatLongError::InvalidCoordinates(_))
        );
        assert_matches!(
            GeoJsonGeometry::from_json(r#"{"type":"LineString","coordinates":[[1,"a"]]}"#),
            Err(LatLongError::InvalidCoordinates(_))
        );
        assert_matches!(GeoJsonGeometry::from_json("[]"), Err(LatLongError::Json(_)));
    }
}
