use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::{Display, Formatter};

use crate::angle::Angle;
use crate::config::{Config, Localized};
use crate::error::LatLongError;
use crate::km::Km;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::rect::Rect;
use crate::region::Region;
use crate::sphere::{self, Cap, ChordAngle};

/// Circle on the Earth's surface: a center point and a radius stored as a chord angle.
///
/// A circle without a radius is empty: it contains no points, not even its center.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: Option<ChordAngle>,
}

impl Circle {
    /// Creates a circle with the radius measured along the Earth's surface.
    pub fn new(center: Point, radius: Km) -> Self {
        Self {
            center,
            radius: Some(radius.earth_chord_angle()),
        }
    }

    /// Creates a circle from a chord angle radius.
    pub fn from_chord_angle(center: Point, radius: ChordAngle) -> Self {
        Self {
            center,
            radius: Some(radius),
        }
    }

    /// Creates an empty circle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an empty circle that keeps its center.
    pub fn without_radius(center: Point) -> Self {
        Self {
            center,
            radius: None,
        }
    }

    /// Circle covering the uncertainty of the point: the radius is the larger of the latitude precision and the
    /// longitude precision scaled down by the cosine of the latitude.
    pub fn from_point_precision(point: Point) -> Self {
        let lat = ChordAngle::from_angle(point.lat().precision_radians());
        let lng = ChordAngle::from_angle(
            point.lng().precision_radians() * point.lat().radians().cos().abs(),
        );

        Self::from_chord_angle(point, if lat > lng { lat } else { lng })
    }

    /// Center of the circle.
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Radius as a chord angle, `None` for an empty circle.
    pub fn chord_angle(&self) -> Option<ChordAngle> {
        self.radius
    }

    /// Radius along the Earth's surface, `None` for an empty circle.
    pub fn radius(&self) -> Option<Km> {
        self.radius.map(Km::from_chord_angle)
    }

    /// Whether the circle contains no points.
    pub fn is_empty(&self) -> bool {
        self.radius.is_none()
    }

    /// Spherical cap covered by the circle.
    pub fn region(&self) -> Region {
        Region::Cap(self.cap())
    }

    fn cap(&self) -> Cap {
        match self.radius {
            Some(radius) => Cap::new(self.center, radius),
            None => Cap::empty(self.center),
        }
    }

    /// Point of the circumference closest to the nearer pole's opposite: south of the center for centers in the
    /// northern hemisphere, north of it otherwise.
    pub fn circumference_to_pole(&self) -> Result<Point, LatLongError> {
        let radius = self.radius.ok_or(LatLongError::EmptyGeometry)?.angle();
        let lat = self.center.lat().radians();
        let lat = if lat > 0.0 { lat - radius } else { lat + radius };

        Ok(Point::new(
            Angle::from_radians(lat, 0.0),
            Angle::from_radians(self.center.lng().radians(), 0.0),
            None,
        ))
    }

    /// Approximates the circle with a polygon of `divisions` vertices.
    ///
    /// ```
    /// use latlong::{Circle, Km, Point};
    ///
    /// let circle = Circle::new(Point::from_degrees(35.0, 139.0, 0.1, 0.1), Km(10.0));
    /// let polygon = circle.to_polygon(36)?;
    /// assert_eq!(polygon.ring().len(), 37);
    /// # Ok::<(), latlong::LatLongError>(())
    /// ```
    pub fn to_polygon(&self, divisions: usize) -> Result<Polygon, LatLongError> {
        if divisions < 3 {
            return Err(LatLongError::InvalidDivisions(divisions));
        }

        let start = self.circumference_to_pole()?.unit_vector();
        let axis = self.center.unit_vector();
        let step = 2.0 * PI / divisions as f64;

        let mut ring: Vec<Point> = (0..divisions)
            .map(|i| sphere::point_from_vector(&sphere::rotate(&start, &axis, step * i as f64)))
            .collect();
        ring.push(ring[0]);

        Ok(Polygon::new(ring))
    }

    /// Smallest latitude/longitude rectangle containing the circle.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let radius = self.radius?.angle();
        let lat = self.center.lat().radians();
        let lat_min = (lat - radius).max(-FRAC_PI_2);
        let lat_max = (lat + radius).min(FRAC_PI_2);

        let sin_radius = radius.sin();
        let cos_lat = lat.cos();
        let (lng_min, lng_max) =
            if lat_min <= -FRAC_PI_2 || lat_max >= FRAC_PI_2 || sin_radius >= cos_lat {
                (-PI, PI)
            } else {
                let lng = self.center.lng().radians();
                let delta = (sin_radius / cos_lat).asin();
                (lng - delta, lng + delta)
            };

        Some(Rect::from_bounds(
            lat_min.to_degrees(),
            lat_max.to_degrees(),
            lng_min.to_degrees(),
            lng_max.to_degrees(),
        ))
    }

    /// Human readable description using the given config.
    pub fn display<'a>(&'a self, config: &'a Config) -> Localized<'a, Circle> {
        Localized::new(self, config)
    }
}

impl Display for Localized<'_, Circle> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value.center.display(self.config))?;
        if let Some(radius) = self.value.radius() {
            write!(f, "/{radius}")?;
        }

        Ok(())
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.display(&Config::default()).fmt(f)
    }
}
