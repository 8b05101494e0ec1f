//! ISO 6709 coordinate strings: `±LAT±LNG[±ALT]/`, several points separated by `/`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::angle::{Angle, AngleKind};
use crate::error::LatLongError;
use crate::point::Point;

lazy_static! {
    static ref COORDINATE: Regex = Regex::new(r"([+-][\d.]+)([+-][\d.]+)([+-][\d.]+)?")
        .unwrap_or_else(|e| unreachable!("invalid ISO 6709 pattern: {e}"));
}

/// Parses the first coordinate found in `s`.
pub fn parse_point(s: &str) -> Result<Point, LatLongError> {
    let Some(captures) = COORDINATE.captures(s) else {
        log::debug!("No ISO 6709 coordinate found in {s:?}");
        return Err(LatLongError::InvalidIso6709(s.to_string()));
    };

    let lat = Angle::parse_iso6709(&captures[1], AngleKind::Latitude)?;
    let lng = Angle::parse_iso6709(&captures[2], AngleKind::Longitude)?;
    let alt = match captures.get(3) {
        Some(alt) => Some(alt.as_str().parse::<f64>().map_err(|_| {
            log::debug!("Invalid altitude {:?} in {s:?}", alt.as_str());
            LatLongError::InvalidIso6709(s.to_string())
        })?),
        None => None,
    };

    Ok(Point::new(lat, lng, alt))
}

/// Parses a `/`-separated sequence of coordinates. Empty tokens are skipped, the first invalid token fails the whole
/// sequence.
pub fn parse_points(s: &str) -> Result<Vec<Point>, LatLongError> {
    s.split('/')
        .filter(|token| !token.trim().is_empty())
        .map(parse_point)
        .collect()
}
