//! See documentation for [`GeometryType`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LatLongError;

/// Type tag of a geometry, as written in the GeoJSON `type` member.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// [`Point`](crate::Point).
    Point,
    /// [`MultiPoint`](crate::MultiPoint).
    MultiPoint,
    /// [`LineString`](crate::LineString).
    LineString,
    /// [`Polygon`](crate::Polygon).
    Polygon,
    /// [`Circle`](crate::Circle). Not part of RFC 7946, but used by several GeoJSON producers.
    Circle,
    /// Absent geometry. Only used by the GeoJSON envelope.
    Null,
}

impl GeometryType {
    /// Name of the type in GeoJSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::Circle => "Circle",
            GeometryType::Null => "Null",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = LatLongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(GeometryType::Point),
            "MultiPoint" => Ok(GeometryType::MultiPoint),
            "LineString" => Ok(GeometryType::LineString),
            "Polygon" => Ok(GeometryType::Polygon),
            "Circle" => Ok(GeometryType::Circle),
            "Null" => Ok(GeometryType::Null),
            _ => Err(LatLongError::UnknownGeometryType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn names() {
        for t in [
            GeometryType::Point,
            GeometryType::MultiPoint,
            GeometryType::LineString,
            GeometryType::Polygon,
            GeometryType::Circle,
            GeometryType::Null,
        ] {
            assert_eq!(t.as_str().parse::<GeometryType>().unwrap(), t);
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{t}\""));
        }

        assert_matches!(
            "MultiPolygon".parse::<GeometryType>(),
            Err(LatLongError::UnknownGeometryType(name)) if name == "MultiPolygon"
        );
    }
}
