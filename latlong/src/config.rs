//! Display configuration.
//!
//! Human readable descriptions of coordinates are produced in one of the supported languages. The language is not
//! a global setting: it is carried by a [`Config`] value that is passed to the `display` methods of the types:
//!
//! ```
//! use latlong::{Config, Lang, Point};
//!
//! let point: Point = "+35.69+139.71/".parse()?;
//! let ja = Config::new(Lang::Ja);
//! assert_eq!(point.display(&ja).to_string(), "北緯35.69度、東経139.71度");
//! assert_eq!(point.to_string(), "lat.35.69N, long.139.71E");
//! # Ok::<(), latlong::LatLongError>(())
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LatLongError;

/// Language of the human readable output.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English.
    #[default]
    En,
    /// Japanese.
    Ja,
}

impl FromStr for Lang {
    type Err = LatLongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ja" | "japanese" => Ok(Self::Ja),
            _ => Err(LatLongError::UnknownLanguage(s.to_string())),
        }
    }
}

impl Display for Lang {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Lang::En => f.write_str("en"),
            Lang::Ja => f.write_str("ja"),
        }
    }
}

/// Settings used when formatting values for humans.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output language.
    pub lang: Lang,
}

impl Config {
    /// Creates a new config with the given language.
    pub const fn new(lang: Lang) -> Self {
        Self { lang }
    }
}

impl Lang {
    pub(crate) fn latitude(self, degrees: &str, north: bool) -> String {
        match (self, north) {
            (Lang::Ja, true) => format!("北緯{degrees}度"),
            (Lang::Ja, false) => format!("南緯{degrees}度"),
            (Lang::En, true) => format!("lat.{degrees}N"),
            (Lang::En, false) => format!("lat.{degrees}S"),
        }
    }

    pub(crate) fn longitude(self, degrees: &str, east: bool) -> String {
        match (self, east) {
            (Lang::Ja, true) => format!("東経{degrees}度"),
            (Lang::Ja, false) => format!("西経{degrees}度"),
            (Lang::En, true) => format!("long.{degrees}E"),
            (Lang::En, false) => format!("long.{degrees}W"),
        }
    }

    /// Altitude in meters. Small negative values are rendered as "shallow", values below -10 km as depth in km.
    pub(crate) fn altitude(self, meters: f64) -> String {
        if meters > 0.0 {
            match self {
                Lang::Ja => format!("標高{meters:.0}m"),
                Lang::En => format!("elv.{meters:.0}m"),
            }
        } else if meters > -10_000.0 {
            match self {
                Lang::Ja => "ごく浅く".to_string(),
                Lang::En => "shallow ground".to_string(),
            }
        } else {
            let km = meters / -1000.0;
            match self {
                Lang::Ja => format!("深さ{km:.0}km"),
                Lang::En => format!("dep.{km:.0}km"),
            }
        }
    }

    pub(crate) fn separator(self) -> &'static str {
        match self {
            Lang::Ja => "、",
            Lang::En => ", ",
        }
    }

    pub(crate) fn precision(self, lat_degrees: f64, lng_degrees: f64) -> String {
        match self {
            Lang::Ja => format!("緯度誤差{lat_degrees:.6}度、経度誤差{lng_degrees:.6}度"),
            Lang::En => {
                format!("lat. error {lat_degrees:.6}deg., long. error {lng_degrees:.6}deg.")
            }
        }
    }
}

/// A value bound to a [`Config`] for display. Created by the `display` methods of the crate types.
#[derive(Debug, Copy, Clone)]
pub struct Localized<'a, T: ?Sized> {
    pub(crate) value: &'a T,
    pub(crate) config: &'a Config,
}

impl<'a, T: ?Sized> Localized<'a, T> {
    pub(crate) fn new(value: &'a T, config: &'a Config) -> Self {
        Self { value, config }
    }
}
