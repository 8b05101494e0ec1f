use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

use crate::sphere::ChordAngle;

/// Mean radius of the Earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Fractional digits kept when a distance is printed. A millimeter is plenty for a radius.
const DISPLAY_DIGITS: usize = 6;

/// Distance along the surface of the Earth in kilometers.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Km(pub f64);

impl Km {
    /// Central angle (radians) subtending this arc on the Earth's surface.
    pub fn earth_angle(self) -> f64 {
        self.0 / EARTH_RADIUS_KM
    }

    /// Same as [`Km::earth_angle`], but as a chord angle.
    pub fn earth_chord_angle(self) -> ChordAngle {
        ChordAngle::from_angle(self.earth_angle())
    }

    /// Length of the surface arc subtending the central angle `radians`.
    pub fn from_earth_angle(radians: f64) -> Self {
        Self(radians * EARTH_RADIUS_KM)
    }

    /// Length of the surface arc subtending the given chord angle.
    pub fn from_chord_angle(chord_angle: ChordAngle) -> Self {
        Self::from_earth_angle(chord_angle.angle())
    }

    /// Value in kilometers.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Value rounded to [`DISPLAY_DIGITS`] fractional digits, without trailing zeros.
    fn rounded(self) -> String {
        let mut text = format!("{:.*}", DISPLAY_DIGITS, self.0);
        if text.contains('.') {
            let len = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(len);
        }
        if text == "-0" {
            text.remove(0);
        }
        text
    }
}

impl Display for Km {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}km", self.rounded())
    }
}

/// Written as a bare JSON number with the same digits as [`Display`].
impl Serialize for Km {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.rounded()).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

impl From<f64> for Km {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn quarter_of_meridian() {
        let km = Km::from_earth_angle(std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(km.value(), 10007.559, epsilon = 1e-3);
    }

    #[test]
    fn display() {
        assert_eq!(Km(100.0).to_string(), "100km");
        assert_eq!(Km(0.5).to_string(), "0.5km");
        assert_eq!(Km(0.0).to_string(), "0km");
        assert_eq!(Km(-1e-9).to_string(), "0km");
    }

    #[test]
    fn conversion_error_is_rounded_away() {
        let km = Km::from_chord_angle(Km(7.3).earth_chord_angle());
        assert_eq!(km.to_string(), "7.3km");
        assert_eq!(Km(7.300000000000001).to_string(), "7.3km");
        assert_eq!(serde_json::to_string(&Km(7.300000000000001)).unwrap(), "7.3");
        assert_eq!(serde_json::to_string(&Km(100.0)).unwrap(), "100");
        assert_eq!(serde_json::from_str::<Km>("7.3").unwrap(), Km(7.3));
    }

    #[test]
    fn non_finite_is_not_serialized() {
        assert!(serde_json::to_string(&Km(f64::NAN)).is_err());
    }

    proptest! {
        #[test]
        fn chord_angle_round_trip(km in 0.0..20000.0f64) {
            let restored = Km::from_chord_angle(Km(km).earth_chord_angle());
            prop_assert!((restored.value() - km).abs() < 1e-6);
        }

        #[test]
        fn angle_round_trip(km in 0.0..20000.0f64) {
            let restored = Km::from_earth_angle(Km(km).earth_angle());
            prop_assert!((restored.value() - km).abs() < 1e-9);
        }
    }
}
