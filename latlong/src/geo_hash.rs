//! GeoHash codec. Bit interleaving is done by the `geohash` crate, this module maps hashes to and from
//! precision-carrying rectangles.

use geo_types::Coord;

use crate::error::LatLongError;
use crate::rect::Rect;

/// Longest hash the encoder produces.
pub const MAX_LEN: usize = 12;

/// Tolerance on the number of bits, keeps exact cell sizes from rounding down to a shorter hash.
const BITS_TOLERANCE: f64 = 1.0 + 5e-10;

/// Decodes a hash into the rectangle of its cell.
pub fn decode(hash: &str) -> Result<Rect, LatLongError> {
    let bbox = geohash::decode_bbox(hash).map_err(|e| {
        log::debug!("Failed to decode GeoHash {hash:?}: {e}");
        e
    })?;

    Ok(Rect::from_bounds(
        bbox.min().y,
        bbox.max().y,
        bbox.min().x,
        bbox.max().x,
    ))
}

/// Hash of the rectangle center with exactly `len` characters.
pub fn encode(rect: &Rect, len: usize) -> Result<String, LatLongError> {
    let center = rect.center();
    let coord = Coord {
        x: center.lng().degrees(),
        y: center.lat().degrees(),
    };

    Ok(geohash::encode(coord, len)?)
}

/// Number of characters whose cell best matches the rectangle size.
///
/// Even characters carry 3 bits of latitude and 2 of longitude, odd ones the other way around. The hash is as long
/// as the less precise of the two axes allows.
pub fn len_for(rect: &Rect) -> usize {
    // 180 = 45 * 2^2, 360 = 45 * 2^3
    let lat_bits = -(rect.lat_size() / 45.0).log2() + 2.0;
    let lng_bits = -(rect.lng_size() / 45.0).log2() + 3.0;

    let lat_len = chars_for_bits(lat_bits, 0.4);
    let lng_len = chars_for_bits(lng_bits, 0.6);

    lat_len.min(lng_len).clamp(1.0, MAX_LEN as f64) as usize
}

/// Each pair of characters carries 5 bits of each axis. The remainder adds one more character if it covers the
/// share of bits the axis gets in the first character of a pair.
fn chars_for_bits(bits: f64, odd_share: f64) -> f64 {
    let pairs = bits / 5.0 * BITS_TOLERANCE;
    let whole = pairs.trunc();
    let odd = if pairs - whole >= odd_share { 1.0 } else { 0.0 };
    whole * 2.0 + odd
}
