use std::fmt::{Display, Formatter};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::config::{Config, Localized};
use crate::error::LatLongError;
use crate::multi_point::MultiPoint;
use crate::point::Point;
use crate::region::Region;
use crate::sphere::{self, Loop};

/// Area bounded by a single ring of points.
///
/// The ring is always stored counterclockwise on the sphere: the interior is on the left when walking along it, and is
/// the smaller of the two areas the ring bounds. Clockwise input is reversed on construction.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polygon {
    ring: MultiPoint,
}

impl Polygon {
    /// Creates a polygon from its ring.
    pub fn new(mut ring: Vec<Point>) -> Self {
        if sphere::ring_area(&ring) < 0.0 {
            log::trace!("Reversing clockwise ring of {} points", ring.len());
            ring.reverse();
        }

        Self {
            ring: ring.into(),
        }
    }

    /// Creates a polygon from GeoJSON-style rings. Only polygons without holes are supported.
    pub fn from_rings(rings: Vec<Vec<Point>>) -> Result<Self, LatLongError> {
        let ring_count = rings.len();
        let mut rings = rings.into_iter();
        match (rings.next(), rings.next()) {
            (Some(ring), None) => Ok(Self::new(ring)),
            _ => Err(LatLongError::UnsupportedShape(format!(
                "polygon must have exactly one ring, got {ring_count}"
            ))),
        }
    }

    /// Points of the ring, counterclockwise.
    pub fn ring(&self) -> &[Point] {
        self.ring.points()
    }

    /// Whether the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Loop region bounded by the ring.
    pub fn region(&self) -> Region {
        Region::Loop(Loop::new(self.ring()))
    }

    /// Centroid of the area. The precision of the result is unknown.
    pub fn centroid(&self) -> Result<Point, LatLongError> {
        self.region().centroid().ok_or(LatLongError::EmptyGeometry)
    }

    /// Human readable description using the given config.
    pub fn display<'a>(&'a self, config: &'a Config) -> Localized<'a, MultiPoint> {
        self.ring.display(config)
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring.fmt(f)
    }
}

/// GeoJSON polygon coordinates: an array with the single ring.
impl Serialize for Polygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1))?;
        seq.serialize_element(&self.ring)?;
        seq.end()
    }
}
