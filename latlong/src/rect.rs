use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::angle::Angle;
use crate::config::Config;
use crate::error::LatLongError;
use crate::point::Point;
use crate::{geo_hash, grid_locator};

/// Latitude/longitude rectangle in degrees, stored as center and size.
///
/// Grid locators and GeoHashes name rectangles rather than points: decoding one yields a `Rect` whose size is the
/// cell size, and encoding chooses the code length from the rectangle size.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    lat: f64,
    lng: f64,
    lat_size: f64,
    lng_size: f64,
}

impl Rect {
    /// Creates a rectangle from its center and size in degrees.
    pub fn from_center_size(lat: f64, lng: f64, lat_size: f64, lng_size: f64) -> Self {
        Self {
            lat,
            lng,
            lat_size: lat_size.abs(),
            lng_size: lng_size.abs(),
        }
    }

    /// Creates a rectangle from its corners in degrees.
    pub fn from_bounds(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self::from_center_size(
            (lat_min + lat_max) / 2.0,
            (lng_min + lng_max) / 2.0,
            lat_max - lat_min,
            lng_max - lng_min,
        )
    }

    /// Decodes a Maidenhead grid locator.
    pub fn from_grid_locator(locator: &str) -> Result<Self, LatLongError> {
        grid_locator::decode(locator)
    }

    /// Decodes a GeoHash.
    pub fn from_geohash(hash: &str) -> Result<Self, LatLongError> {
        geo_hash::decode(hash)
    }

    /// Southern edge.
    pub fn lat_min(&self) -> f64 {
        self.lat - self.lat_size / 2.0
    }

    /// Northern edge.
    pub fn lat_max(&self) -> f64 {
        self.lat + self.lat_size / 2.0
    }

    /// Western edge.
    pub fn lng_min(&self) -> f64 {
        self.lng - self.lng_size / 2.0
    }

    /// Eastern edge.
    pub fn lng_max(&self) -> f64 {
        self.lng + self.lng_size / 2.0
    }

    /// Height in degrees of latitude.
    pub fn lat_size(&self) -> f64 {
        self.lat_size
    }

    /// Width in degrees of longitude.
    pub fn lng_size(&self) -> f64 {
        self.lng_size
    }

    /// Center of the rectangle. Its precision is the rectangle size.
    pub fn center(&self) -> Point {
        Point::from_degrees(self.lat, self.lng, self.lat_size, self.lng_size)
    }

    /// Corners, counterclockwise from the south-west one.
    pub fn corners(&self) -> [Point; 4] {
        let corner = |lat: f64, lng: f64| Point::new(
            Angle::from_degrees(lat, self.lat_size),
            Angle::from_degrees(lng, self.lng_size),
            None,
        );

        [
            corner(self.lat_min(), self.lng_min()),
            corner(self.lat_min(), self.lng_max()),
            corner(self.lat_max(), self.lng_max()),
            corner(self.lat_max(), self.lng_min()),
        ]
    }

    /// Shortest grid locator whose cell is not smaller than the rectangle.
    pub fn grid_locator(&self) -> String {
        grid_locator::encode(self)
    }

    /// GeoHash with the length matching the rectangle size.
    pub fn geohash(&self) -> Result<String, LatLongError> {
        self.geohash_with_len(geo_hash::len_for(self))
    }

    /// GeoHash of the rectangle center with the given number of characters.
    pub fn geohash_with_len(&self, len: usize) -> Result<String, LatLongError> {
        geo_hash::encode(self, len)
    }

    /// Human readable description of the rectangle size.
    pub fn precision_string(&self, config: &Config) -> String {
        config.lang.precision(self.lat_size, self.lng_size)
    }
}

/// Written as the array of the four corners. Corners are rounded to the digit the rectangle size allows.
impl Serialize for Rect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let corners = self.corners();
        let mut seq = serializer.serialize_seq(Some(corners.len()))?;
        for corner in &corners {
            seq.serialize_element(corner)?;
        }
        seq.end()
    }
}
