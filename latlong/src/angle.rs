//! Angles that remember how precisely they were measured.
//!
//! An [`Angle`] stores its value together with a *precision*: the rounding granularity implied by the least
//! significant digit of the text it was parsed from. `"35.69"` is an angle of 35.69° known to 0.01°, while `"35.690"`
//! is the same value known to 0.001°. Formatting uses the precision to choose the number of fractional digits, so
//! parsing and printing round-trips the input text.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LatLongError;

/// Number of fractional digits used for angles of unknown precision.
const DEFAULT_DIGITS: usize = 2;

/// More digits than an `f64` can meaningfully carry.
const MAX_DIGITS: usize = 17;

/// Absorbs the error introduced by the degree -> radian -> degree conversion of the precision.
const DIGITS_TOLERANCE: f64 = 1e-9;

/// Which coordinate an ISO 6709 angle token describes.
///
/// Longitudes have up to three integer degree digits and latitudes up to two, so the position of the decimal point
/// maps to a different degree/minute/second layout for each kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AngleKind {
    /// `±DD.D`, `±DDMM.M` or `±DDMMSS.S`.
    Latitude,
    /// `±DDD.D`, `±DDDMM.M` or `±DDDMMSS.S`.
    Longitude,
}

impl AngleKind {
    /// Smallest accepted decimal point position for each of the layouts: degrees, degrees+minutes,
    /// degrees+minutes+seconds. The last entry is the first position that is not accepted.
    fn bands(self) -> [usize; 4] {
        match self {
            AngleKind::Latitude => [2, 4, 6, 8],
            AngleKind::Longitude => [3, 5, 7, 9],
        }
    }
}

/// Angle in radians with its precision.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Angle {
    value: f64,
    precision: f64,
}

impl Angle {
    /// Creates a new angle from a value and precision in degrees.
    pub fn from_degrees(degrees: f64, precision: f64) -> Self {
        Self {
            value: degrees.to_radians(),
            precision: precision.abs().to_radians(),
        }
    }

    /// Creates a new angle from a value and precision in radians.
    pub fn from_radians(radians: f64, precision: f64) -> Self {
        Self {
            value: radians,
            precision: precision.abs(),
        }
    }

    /// Value in radians.
    pub fn radians(&self) -> f64 {
        self.value
    }

    /// Value in degrees.
    pub fn degrees(&self) -> f64 {
        self.value.to_degrees()
    }

    /// Precision in radians. Zero means that the precision is unknown.
    pub fn precision_radians(&self) -> f64 {
        self.precision
    }

    /// Precision in degrees. Zero means that the precision is unknown.
    pub fn precision_degrees(&self) -> f64 {
        self.precision.to_degrees()
    }

    /// Returns a copy of the angle with a different precision (in degrees).
    pub fn with_precision(self, precision: f64) -> Self {
        Self {
            precision: precision.abs().to_radians(),
            ..self
        }
    }

    /// Number of fractional digits needed to print the angle in degrees without losing or inventing precision.
    pub fn digits(&self) -> usize {
        let precision = self.precision_degrees();
        if precision == 0.0 {
            return DEFAULT_DIGITS;
        }

        let digits = (-precision.log10() - DIGITS_TOLERANCE).ceil();
        if digits > 0.0 {
            (digits as usize).min(MAX_DIGITS)
        } else {
            0
        }
    }

    /// Parses a decimal degrees token, e.g. `-12.575` or `270`.
    ///
    /// The precision is `1°` for integer tokens and `10^-n` degrees for tokens with `n` fractional digits.
    pub fn parse_decimal(token: &str) -> Result<Self, LatLongError> {
        let token = token.trim();
        let (degrees, precision) = parse_degrees(token, decimal_point(token))?;
        Ok(Self::from_degrees(degrees, precision))
    }

    /// Parses an angle token of an ISO 6709 string.
    ///
    /// Depending on the decimal point position the token is read as decimal degrees, degrees and minutes
    /// (`±DDMM.M`) or degrees, minutes and seconds (`±DDMMSS.S`). The sign is mandatory for the minute and second
    /// layouts.
    pub fn parse_iso6709(token: &str, kind: AngleKind) -> Result<Self, LatLongError> {
        let token = token.trim();
        let pos = decimal_point(token);
        let [deg, deg_min, deg_min_sec, end] = kind.bands();

        let (degrees, precision) = if pos < deg || pos >= end {
            log::debug!("Decimal point of {kind:?} token {token:?} is at unsupported position {pos}");
            return Err(LatLongError::InvalidAngle(token.to_string()));
        } else if pos < deg_min {
            parse_degrees(token, pos)?
        } else if pos < deg_min_sec {
            parse_degrees_minutes(token, pos)?
        } else {
            parse_degrees_minutes_seconds(token, pos)?
        };

        log::trace!("Parsed {kind:?} token {token:?} as {degrees} (±{precision})");
        Ok(Self::from_degrees(degrees, precision))
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}", self.digits(), self.degrees())
    }
}

impl FromStr for Angle {
    type Err = LatLongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_decimal(s)
    }
}

/// Angles are written as bare JSON numbers with exactly as many digits as the precision allows.
impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.to_string()).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        Self::parse_decimal(&number.to_string()).map_err(D::Error::custom)
    }
}

fn decimal_point(token: &str) -> usize {
    token.find('.').unwrap_or(token.len())
}

/// Exact power of ten, `10^exp`.
fn pow10(exp: i32) -> f64 {
    format!("1e{exp}")
        .parse()
        .unwrap_or_else(|_| 10f64.powi(exp))
}

/// Precision of the last digit of the token, in units of the last integer component.
fn last_digit_precision(token: &str, pos: usize) -> f64 {
    if token.len() == pos {
        1.0
    } else {
        pow10(pos as i32 - token.len() as i32 + 1)
    }
}

fn parse_number(token: &str, part: Option<&str>) -> Result<f64, LatLongError> {
    part.and_then(|part| part.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| LatLongError::InvalidAngle(token.to_string()))
}

fn apply_sign(token: &str, value: f64) -> Result<f64, LatLongError> {
    match token.as_bytes().first() {
        Some(b'+') => Ok(value),
        Some(b'-') => Ok(-value),
        _ => {
            log::debug!("Sign is missing in angle token {token:?}");
            Err(LatLongError::InvalidAngle(token.to_string()))
        }
    }
}

fn parse_degrees(token: &str, pos: usize) -> Result<(f64, f64), LatLongError> {
    let degrees = parse_number(token, Some(token))?;
    Ok((degrees, last_digit_precision(token, pos)))
}

fn parse_degrees_minutes(token: &str, pos: usize) -> Result<(f64, f64), LatLongError> {
    let degrees = parse_number(token, token.get(1..pos - 2))?;
    let minutes = parse_number(token, token.get(pos - 2..))?;
    let value = apply_sign(token, degrees + minutes / 60.0)?;

    Ok((value, last_digit_precision(token, pos) / 60.0))
}

fn parse_degrees_minutes_seconds(token: &str, pos: usize) -> Result<(f64, f64), LatLongError> {
    let degrees = parse_number(token, token.get(1..pos - 4))?;
    let minutes = parse_number(token, token.get(pos - 4..pos - 2))?;
    let seconds = parse_number(token, token.get(pos - 2..))?;
    let value = apply_sign(token, degrees + minutes / 60.0 + seconds / 3600.0)?;

    Ok((value, last_digit_precision(token, pos) / 3600.0))
}
