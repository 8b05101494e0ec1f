//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum LatLongError {
    /// A numeric token could not be read as an angle: bad digits, missing sign or a decimal point outside of
    /// the recognized degree/minute/second layouts.
    #[error("invalid angle: {0:?}")]
    InvalidAngle(String),
    /// Text does not follow the ISO 6709 `±DD.DD±DDD.DD[±AAA]` layout.
    #[error("invalid ISO 6709 coordinate: {0:?}")]
    InvalidIso6709(String),
    /// A coordinate array is malformed, e.g. has fewer than two elements.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
    /// Character outside of the Maidenhead alphabet for its position.
    #[error("invalid grid locator {locator:?} at position {position}")]
    InvalidGridLocator {
        /// The whole input string.
        locator: String,
        /// Character index of the first invalid character.
        position: usize,
    },
    /// GeoHash string could not be decoded or encoded.
    #[error("geohash error: {0}")]
    GeoHash(#[from] geohash::GeohashError),
    /// The geometry is valid GeoJSON but cannot be represented, e.g. a polygon with holes.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),
    /// GeoJSON `type` member is not one of the supported geometry types.
    #[error("unknown geometry type: {0:?}")]
    UnknownGeometryType(String),
    /// The operation needs at least one point, but the geometry has none.
    #[error("geometry has no points")]
    EmptyGeometry,
    /// Circle cannot be approximated with the requested number of vertices.
    #[error("cannot build a polygon with {0} vertices")]
    InvalidDivisions(usize),
    /// Language code is not one of the supported output languages.
    #[error("unknown language: {0:?}")]
    UnknownLanguage(String),
    /// Error reading or writing JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
