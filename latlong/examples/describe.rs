//! Describes coordinates given on the command line.
//!
//! Each argument may be an ISO 6709 string (one or more points), a Maidenhead grid locator or a GeoHash:
//!
//! ```shell
//! LATLONG_LANG=ja cargo run --example describe -- "+35.69+139.71/" PM95UQ xn76urx6
//! ```

use latlong::geojson::GeoJsonGeometry;
use latlong::{Config, Geometry, LatLongError, MultiPoint, Rect};

fn main() -> Result<(), LatLongError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var("LATLONG_LANG") {
        Ok(lang) => Config::new(lang.parse()?),
        Err(_) => Config::default(),
    };

    for arg in std::env::args().skip(1) {
        if let Err(err) = describe(&arg, &config) {
            log::error!("Cannot describe {arg:?}: {err}");
        }
    }

    Ok(())
}

fn describe(arg: &str, config: &Config) -> Result<(), LatLongError> {
    if let Ok(points) = arg.parse::<MultiPoint>() {
        for point in &points {
            println!("{}", point.display(config));
            println!("  precision: {}", point.precision_string(config));
            println!("  grid locator: {}", point.grid_locator());
            println!("  geohash: {}", point.geohash()?);
        }

        let geometry = GeoJsonGeometry::from(Geometry::from(points));
        println!("  geojson: {}", serde_json::to_string(&geometry)?);
        return Ok(());
    }

    let rect = match Rect::from_grid_locator(arg) {
        Ok(rect) => rect,
        Err(err) => {
            log::debug!("{arg:?} is not a grid locator: {err}");
            Rect::from_geohash(arg)?
        }
    };

    println!("{}", rect.center().display(config));
    println!("  precision: {}", rect.precision_string(config));
    println!("  grid locator: {}", rect.grid_locator());
    println!("  geohash: {}", rect.geohash()?);
    println!("  bounds: {}", serde_json::to_string(&rect)?);

    Ok(())
}
