use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nalgebra::Vector3;
use serde::de::Error as _;
use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::angle::Angle;
use crate::config::{Config, Localized};
use crate::error::LatLongError;
use crate::km::Km;
use crate::rect::Rect;
use crate::region::Region;
use crate::sphere;

/// Latitude and longitude with their precisions, and an optional altitude in meters.
///
/// The altitude carries no precision of its own.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    lat: Angle,
    lng: Angle,
    alt: Option<f64>,
}

impl Point {
    /// Creates a new point.
    pub fn new(lat: Angle, lng: Angle, alt: Option<f64>) -> Self {
        Self { lat, lng, alt }
    }

    /// Creates a new point from latitude and longitude values and precisions in degrees.
    ///
    /// ```
    /// use latlong::Point;
    ///
    /// let point = Point::from_degrees(35.69, 139.71, 0.01, 0.01);
    /// assert_eq!(point.to_string(), "lat.35.69N, long.139.71E");
    /// ```
    pub fn from_degrees(lat: f64, lng: f64, lat_precision: f64, lng_precision: f64) -> Self {
        Self::new(
            Angle::from_degrees(lat, lat_precision),
            Angle::from_degrees(lng, lng_precision),
            None,
        )
    }

    /// Returns a copy of the point with the given altitude in meters.
    pub fn with_altitude(self, alt: f64) -> Self {
        Self {
            alt: Some(alt),
            ..self
        }
    }

    /// Latitude.
    pub fn lat(&self) -> Angle {
        self.lat
    }

    /// Longitude.
    pub fn lng(&self) -> Angle {
        self.lng
    }

    /// Altitude in meters.
    pub fn alt(&self) -> Option<f64> {
        self.alt
    }

    /// Product of the latitude and longitude precisions in square degrees. Smaller is more precise.
    pub fn precision_area(&self) -> f64 {
        self.lat.precision_degrees() * self.lng.precision_degrees()
    }

    /// Whether the two points have exactly the same latitude and longitude values, regardless of precision and
    /// altitude.
    pub fn same_coordinate(&self, other: &Point) -> bool {
        self.lat.radians() == other.lat.radians() && self.lng.radians() == other.lng.radians()
    }

    pub(crate) fn unit_vector(&self) -> Vector3<f64> {
        sphere::unit_vector(self.lat.radians(), self.lng.radians())
    }

    /// Central angle between two points in radians.
    pub fn distance_angle(&self, other: &Point) -> f64 {
        sphere::angle_between(&self.unit_vector(), &other.unit_vector())
    }

    /// Distance along the Earth's surface.
    pub fn distance_km(&self, other: &Point) -> Km {
        Km::from_earth_angle(self.distance_angle(other))
    }

    /// Rectangle centered at the point, sized by the point's precision.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(
            self.lat.degrees(),
            self.lng.degrees(),
            self.lat.precision_degrees(),
            self.lng.precision_degrees(),
        )
    }

    /// Maidenhead grid locator of the cell that matches the point's precision.
    pub fn grid_locator(&self) -> String {
        self.rect().grid_locator()
    }

    /// GeoHash with as many characters as the point's precision justifies.
    pub fn geohash(&self) -> Result<String, LatLongError> {
        self.rect().geohash()
    }

    /// Degenerate region consisting of this point only.
    pub fn region(&self) -> Region {
        Region::Point(*self)
    }

    /// Formats the point as ISO 6709 decimal degrees, e.g. `+35.69+139.71/`.
    pub fn to_iso6709(&self) -> String {
        let mut result = format!(
            "{}{}",
            iso6709_angle(&self.lat, 2),
            iso6709_angle(&self.lng, 3)
        );
        if let Some(alt) = self.alt {
            result.push_str(&format!("{alt:+}"));
        }
        result.push('/');
        result
    }

    /// Human readable description using the given config.
    pub fn display<'a>(&'a self, config: &'a Config) -> Localized<'a, Point> {
        Localized::new(self, config)
    }

    /// Human readable description of the point precision.
    pub fn precision_string(&self, config: &Config) -> String {
        config
            .lang
            .precision(self.lat.precision_degrees(), self.lng.precision_degrees())
    }
}

fn iso6709_angle(angle: &Angle, int_digits: usize) -> String {
    let digits = angle.digits();
    let width = 1 + int_digits + if digits > 0 { digits + 1 } else { 0 };
    format!("{:+0width$.digits$}", angle.degrees())
}

impl Display for Localized<'_, Point> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let lang = self.config.lang;
        let Point { lat, lng, alt } = self.value;

        let lat_str = format!("{:.*}", lat.digits(), lat.degrees().abs());
        let lng_str = format!("{:.*}", lng.digits(), lng.degrees().abs());

        write!(f, "{}", lang.latitude(&lat_str, lat.degrees() >= 0.0))?;
        write!(f, "{}", lang.separator())?;
        write!(f, "{}", lang.longitude(&lng_str, lng.degrees() >= 0.0))?;
        if let Some(alt) = alt {
            write!(f, "{}{}", lang.separator(), lang.altitude(*alt))?;
        }

        Ok(())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.display(&Config::default()).fmt(f)
    }
}

impl FromStr for Point {
    type Err = LatLongError;

    /// Parses an ISO 6709 point, e.g. `+35.69+139.71/` or `+12.34+123.45+3776/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::iso6709::parse_point(s)
    }
}

/// Altitude is written without fractional digits.
struct Altitude(f64);

impl Serialize for Altitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number =
            serde_json::Number::from_str(&format!("{:.0}", self.0)).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

/// GeoJSON position: `[lng, lat]` or `[lng, lat, alt]`.
impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.alt.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.lng)?;
        seq.serialize_element(&self.lat)?;
        if let Some(alt) = self.alt {
            seq.serialize_element(&Altitude(alt))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let numbers = Vec::<serde_json::Number>::deserialize(deserializer)?;
        Point::try_from(numbers.as_slice()).map_err(D::Error::custom)
    }
}

impl TryFrom<&[serde_json::Number]> for Point {
    type Error = LatLongError;

    fn try_from(value: &[serde_json::Number]) -> Result<Self, Self::Error> {
        let [lng, lat, rest @ ..] = value else {
            return Err(LatLongError::InvalidCoordinates(format!(
                "position must contain at least 2 elements, got {}",
                value.len()
            )));
        };

        let alt = match rest.first() {
            Some(alt) => Some(alt.as_f64().ok_or_else(|| {
                LatLongError::InvalidCoordinates(format!("invalid altitude {alt}"))
            })?),
            None => None,
        };

        Ok(Self::new(
            Angle::parse_decimal(&lat.to_string())?,
            Angle::parse_decimal(&lng.to_string())?,
            alt,
        ))
    }
}
