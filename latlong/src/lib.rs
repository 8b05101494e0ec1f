//! Latitude/longitude values that remember their precision, and geometries built from them.
//!
//! Every coordinate parsed by this crate keeps the precision implied by the text it came from. The precision is used
//! to format the value back, to pick the length of grid locators and geohashes, and to deduplicate points:
//!
//! ```
//! use latlong::{Config, Lang, Point};
//!
//! let point: Point = "+35.69+139.71/".parse()?;
//! assert_eq!(point.to_string(), "lat.35.69N, long.139.71E");
//! assert_eq!(point.display(&Config::new(Lang::Ja)).to_string(), "北緯35.69度、東経139.71度");
//! assert_eq!(point.grid_locator(), "PM95UQ");
//! # Ok::<(), latlong::LatLongError>(())
//! ```
//!
//! Supported formats:
//! * ISO 6709 strings, parsed with `str::parse` into [`Point`] or [`MultiPoint`],
//! * Maidenhead grid locators, see [`Rect::from_grid_locator`],
//! * GeoHash, see [`Rect::from_geohash`],
//! * GeoJSON geometries, see [`geojson`].

mod angle;
mod circle;
mod config;
mod error;
mod geo_hash;
mod geo_types;
pub mod geojson;
mod geometry;
mod geometry_type;
mod grid_locator;
mod iso6709;
mod km;
mod line_string;
mod multi_point;
mod point;
mod polygon;
mod rect;
mod region;
mod sphere;

pub use angle::{Angle, AngleKind};
pub use circle::Circle;
pub use config::{Config, Lang, Localized};
pub use error::LatLongError;
pub use geometry::Geometry;
pub use geometry_type::GeometryType;
pub use km::{Km, EARTH_RADIUS_KM};
pub use line_string::LineString;
pub use multi_point::MultiPoint;
pub use point::Point;
pub use polygon::Polygon;
pub use rect::Rect;
pub use region::Region;
pub use sphere::{Cap, ChordAngle, Loop, Polyline};
