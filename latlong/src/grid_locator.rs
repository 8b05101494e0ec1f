//! Maidenhead grid locator codec.
//!
//! A locator is read in tiers of four characters: a longitude letter, a latitude letter, a longitude digit and a
//! latitude digit. Letters split the current cell into 24 parts (18 in the first tier), digits into 10. Decoding
//! starts from the whole globe, i.e. the south-west corner `(-90, -180)`.

use crate::error::LatLongError;
use crate::rect::Rect;

/// Initial cell height in degrees. After the first letter division (`/24`) a field is 10° high.
const LAT_CELL: f64 = 10.0 * 24.0;
/// Initial cell width in degrees. After the first letter division (`/24`) a field is 20° wide.
const LNG_CELL: f64 = 20.0 * 24.0;

/// Tolerance used when comparing cell sizes with the rectangle size.
const SIZE_TOLERANCE: f64 = 1.0 + 1e-11;

/// Longest locator produced by [`encode`], six character pairs.
const MAX_LEN: usize = 12;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Axis {
    Lat,
    Lng,
}

/// What the character at the given position of a locator describes.
fn tier(position: usize) -> (Axis, u32, u8) {
    match position % 4 {
        0 => (Axis::Lng, 24, b'A'),
        1 => (Axis::Lat, 24, b'A'),
        2 => (Axis::Lng, 10, b'0'),
        _ => (Axis::Lat, 10, b'0'),
    }
}

/// Largest valid digit value for the given position. The first pair of letters only goes up to `R`.
fn max_value(position: usize, divisions: u32) -> u32 {
    if position < 2 {
        18
    } else {
        divisions
    }
}

/// Decodes a locator into the rectangle of its cell. Letters are case-insensitive.
pub fn decode(locator: &str) -> Result<Rect, LatLongError> {
    let mut lat = -90.0;
    let mut lng = -180.0;
    let mut lat_cell = LAT_CELL;
    let mut lng_cell = LNG_CELL;

    for (position, c) in locator.chars().enumerate() {
        let (axis, divisions, base) = tier(position);
        let value = (c.to_ascii_uppercase() as u32)
            .checked_sub(base as u32)
            .filter(|v| *v < max_value(position, divisions) && c.is_ascii_alphanumeric())
            .ok_or_else(|| {
                log::debug!("Invalid character {c:?} in grid locator {locator:?}");
                LatLongError::InvalidGridLocator {
                    locator: locator.to_string(),
                    position,
                }
            })?;

        match axis {
            Axis::Lng => {
                lng_cell /= divisions as f64;
                lng += lng_cell * value as f64;
            }
            Axis::Lat => {
                lat_cell /= divisions as f64;
                lat += lat_cell * value as f64;
            }
        }
    }

    Ok(Rect::from_center_size(
        lat + lat_cell / 2.0,
        lng + lng_cell / 2.0,
        lat_cell,
        lng_cell,
    ))
}

/// Encodes the center of the rectangle. Stops at the first tier whose cells are smaller than the rectangle and keeps
/// an even number of characters. Rectangles of zero size get the longest locator.
pub fn encode(rect: &Rect) -> String {
    let center = rect.center();
    let mut lat = center.lat().degrees() + 90.0;
    let mut lng = center.lng().degrees() + 180.0;
    let mut lat_cell = LAT_CELL;
    let mut lng_cell = LNG_CELL;

    let mut locator = String::new();
    for position in 0..MAX_LEN {
        let (axis, divisions, base) = tier(position);
        let (offset, cell, size) = match axis {
            Axis::Lng => (&mut lng, &mut lng_cell, rect.lng_size()),
            Axis::Lat => (&mut lat, &mut lat_cell, rect.lat_size()),
        };

        *cell /= divisions as f64;
        if *cell * SIZE_TOLERANCE < size {
            break;
        }

        let value = (*offset / *cell)
            .floor()
            .clamp(0.0, (max_value(position, divisions) - 1) as f64);
        *offset -= value * *cell;
        locator.push(char::from(base + value as u8));
    }

    if locator.len() % 2 == 1 {
        locator.pop();
    }

    log::trace!("Encoded {rect:?} as grid locator {locator:?}");
    locator
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::point::Point;

    #[test]
    fn decode_tokyo() {
        let rect = decode("PM95UQ").unwrap();
        assert_abs_diff_eq!(rect.center().lat().degrees(), 35.6875, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.center().lng().degrees(), 139.708333, epsilon = 1e-6);
        assert_abs_diff_eq!(rect.lat_size(), 1.0 / 24.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.lng_size(), 1.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("pm95uq").unwrap(), decode("PM95UQ").unwrap());
    }

    #[test]
    fn invalid_characters() {
        assert_matches!(
            decode("SM95"),
            Err(LatLongError::InvalidGridLocator { position: 0, .. })
        );
        assert_matches!(
            decode("PM9X"),
            Err(LatLongError::InvalidGridLocator { position: 3, .. })
        );
        assert_matches!(
            decode("PM95UY"),
            Err(LatLongError::InvalidGridLocator { position: 5, .. })
        );
        assert_matches!(
            decode("PM95ü"),
            Err(LatLongError::InvalidGridLocator { position: 4, .. })
        );
    }

    #[test]
    fn encode_point() {
        let point = Point::from_degrees(35.6875, 139.708333, 1.0 / 24.0, 1.0 / 12.0);
        assert_eq!(point.grid_locator(), "PM95UQ");

        let point = Point::from_degrees(35.69, 139.71, 1.0, 2.0);
        assert_eq!(point.grid_locator(), "PM95");
    }

    #[test]
    fn encode_truncates_to_pairs() {
        // Longitude is fine enough for the subsquare, latitude only for the square.
        let rect = Rect::from_center_size(35.6875, 139.708333, 1.0, 1.0 / 12.0);
        assert_eq!(encode(&rect), "PM95");
    }

    #[test]
    fn odd_length_loses_last_character() {
        assert_eq!(encode(&decode("P").unwrap()), "");
        assert_eq!(encode(&decode("PM9").unwrap()), "PM");
        assert_eq!(encode(&decode("PM95U").unwrap()), "PM95");
        assert_eq!(encode(&decode("PM95UQ0").unwrap()), "PM95UQ");
    }

    proptest! {
        #[test]
        fn round_trip(
            full in "[A-R]{2}[0-9]{2}[A-X]{2}[0-9]{2}[A-X]{2}[0-9]{2}",
            len in 0..=MAX_LEN,
        ) {
            let locator = &full[..len];
            let rect = decode(locator).unwrap();
            prop_assert_eq!(encode(&rect), &locator[..len - len % 2]);
        }
    }
}
