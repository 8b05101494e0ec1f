//! Primitives on the unit sphere: points as unit vectors, chord angles, caps, loops and polylines.

use std::f64::consts::PI;

use nalgebra::{Rotation3, Unit, Vector3};

use crate::angle::Angle;
use crate::point::Point;

/// Unit vector pointing at the given latitude and longitude (radians).
pub(crate) fn unit_vector(lat: f64, lng: f64) -> Vector3<f64> {
    Vector3::new(lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin())
}

/// Point of unknown precision at the direction of `v`.
pub(crate) fn point_from_vector(v: &Vector3<f64>) -> Point {
    let lat = v.z.atan2((v.x * v.x + v.y * v.y).sqrt());
    let lng = v.y.atan2(v.x);
    Point::new(Angle::from_radians(lat, 0.0), Angle::from_radians(lng, 0.0), None)
}

/// Rotates `p` around `axis` by `angle` radians, counterclockwise when looking at the sphere from the tip of `axis`.
pub(crate) fn rotate(p: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle) * *p
}

/// Angle between two unit vectors, in radians.
pub(crate) fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}

/// Spherical angle represented by the squared length of the chord it subtends on the unit sphere.
///
/// Comparing chord angles needs no trigonometry and stays accurate for nearly antipodal points.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct ChordAngle(f64);

impl ChordAngle {
    /// Zero angle.
    pub const ZERO: Self = Self(0.0);
    /// Angle of 180 degrees.
    pub const STRAIGHT: Self = Self(4.0);

    /// Creates a chord angle from an angle in radians. Angles are clamped to `[0, π]`.
    pub fn from_angle(radians: f64) -> Self {
        if radians <= 0.0 {
            Self::ZERO
        } else if radians >= PI {
            Self::STRAIGHT
        } else {
            let length = 2.0 * (radians / 2.0).sin();
            Self((length * length).min(4.0))
        }
    }

    /// Creates a chord angle from the squared chord length, clamped to `[0, 4]`.
    pub fn from_squared_length(length2: f64) -> Self {
        Self(length2.clamp(0.0, 4.0))
    }

    /// Chord angle between two unit vectors.
    pub(crate) fn between(a: &Vector3<f64>, b: &Vector3<f64>) -> Self {
        Self::from_squared_length((a - b).norm_squared())
    }

    /// Squared length of the chord.
    pub fn length2(&self) -> f64 {
        self.0
    }

    /// Angle in radians.
    pub fn angle(&self) -> f64 {
        2.0 * (self.0.sqrt() / 2.0).asin()
    }
}

/// Region of the sphere within a fixed chord angle of a center point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cap {
    center: Point,
    radius: Option<ChordAngle>,
}

impl Cap {
    /// Creates a cap around `center` with the given radius.
    pub fn new(center: Point, radius: ChordAngle) -> Self {
        Self {
            center,
            radius: Some(radius),
        }
    }

    /// Creates a cap that contains no points.
    pub fn empty(center: Point) -> Self {
        Self {
            center,
            radius: None,
        }
    }

    /// Center of the cap.
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Radius of the cap, `None` for an empty cap.
    pub fn radius(&self) -> Option<ChordAngle> {
        self.radius
    }

    /// Whether the cap contains no points.
    pub fn is_empty(&self) -> bool {
        self.radius.is_none()
    }

    /// Whether the point lies inside the cap or on its boundary.
    pub fn contains_point(&self, point: &Point) -> bool {
        match self.radius {
            Some(radius) => {
                ChordAngle::between(&self.center.unit_vector(), &point.unit_vector()) <= radius
            }
            None => false,
        }
    }
}

/// Points closer than this (radians, about 6 mm on the Earth) to a polyline lie on it.
const ON_PATH_TOLERANCE: f64 = 1e-9;

/// Signed area of the spherical triangle `abc`, positive when the vertices go counterclockwise.
fn triangle_area(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> f64 {
    let det = a.dot(&b.cross(c));
    2.0 * det.atan2(1.0 + a.dot(b) + b.dot(c) + c.dot(a))
}

/// First moment of the spherical triangle `abc` (the integral of the unit vector over its area), signed like
/// [`triangle_area`]. Its direction is the centroid of the triangle.
fn triangle_moment(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> Vector3<f64> {
    let ratio = |angle: f64| if angle == 0.0 { 1.0 } else { angle / angle.sin() };
    let ra = ratio(angle_between(b, c));
    let rb = ratio(angle_between(c, a));
    let rc = ratio(angle_between(a, b));

    // Cramer's rule on the rows a, b - a, c - a for numerical stability.
    let x = Vector3::new(a.x, b.x - a.x, c.x - a.x);
    let y = Vector3::new(a.y, b.y - a.y, c.y - a.y);
    let z = Vector3::new(a.z, b.z - a.z, c.z - a.z);
    let r = Vector3::new(ra, rb - ra, rc - ra);

    0.5 * Vector3::new(y.cross(&z).dot(&r), z.cross(&x).dot(&r), x.cross(&y).dot(&r))
}

/// Ring without the closing vertex that repeats the first one.
fn open_ring(ring: &[Point]) -> &[Point] {
    match ring {
        [first, .., last] if first.same_coordinate(last) => &ring[..ring.len() - 1],
        _ => ring,
    }
}

/// Area enclosed on the left of the ring on the unit sphere, summed over a fan of triangles from the first vertex.
///
/// Negative for clockwise rings, i.e. rings whose left side is larger than their right side.
pub(crate) fn ring_area(ring: &[Point]) -> f64 {
    let vertices: Vec<_> = open_ring(ring).iter().map(Point::unit_vector).collect();
    fan_area(&vertices)
}

fn fan_area(vertices: &[Vector3<f64>]) -> f64 {
    let Some((origin, rest)) = vertices.split_first() else {
        return 0.0;
    };

    rest.windows(2)
        .map(|edge| triangle_area(origin, &edge[0], &edge[1]))
        .sum()
}

/// Closed ring of great circle edges. The interior is on the left, so it is always the smaller of the two areas the
/// ring divides the sphere into.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    vertices: Vec<Vector3<f64>>,
}

impl Loop {
    /// Creates a loop from a ring of points. The closing point may be repeated. Clockwise rings are reversed.
    pub fn new(ring: &[Point]) -> Self {
        let mut vertices: Vec<_> = open_ring(ring).iter().map(Point::unit_vector).collect();
        if fan_area(&vertices) < 0.0 {
            vertices.reverse();
        }

        Self { vertices }
    }

    /// Whether the loop has too few vertices to enclose anything.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Area of the loop on the unit sphere, in steradians.
    pub fn area(&self) -> f64 {
        fan_area(&self.vertices)
    }

    /// Whether the point lies inside the loop.
    ///
    /// Sums the angles the edges subtend around the point: a loop around the point turns by a full circle, any
    /// other loop by none.
    pub fn contains_point(&self, point: &Point) -> bool {
        if self.is_empty() {
            return false;
        }

        let p = point.unit_vector();
        let next = self.vertices.iter().cycle().skip(1);
        let winding: f64 = self
            .vertices
            .iter()
            .zip(next)
            .map(|(a, b)| p.dot(&a.cross(b)).atan2(a.dot(b) - p.dot(a) * p.dot(b)))
            .sum();

        winding > PI
    }

    /// Center of mass of the loop interior, `None` for empty loops.
    pub fn centroid(&self) -> Option<Point> {
        let (origin, rest) = self.vertices.split_first()?;
        let sum: Vector3<f64> = rest
            .windows(2)
            .map(|edge| triangle_moment(origin, &edge[0], &edge[1]))
            .sum();

        sum.try_normalize(0.0).map(|v| point_from_vector(&v))
    }
}

/// Path of great circle edges through a sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    vertices: Vec<Vector3<f64>>,
}

impl Polyline {
    /// Creates a polyline through the points.
    pub fn new(points: &[Point]) -> Self {
        Self {
            vertices: points.iter().map(Point::unit_vector).collect(),
        }
    }

    /// Whether the polyline has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the point lies on the path, vertices and endpoints included.
    pub fn contains_point(&self, point: &Point) -> bool {
        let p = point.unit_vector();
        match self.vertices.as_slice() {
            [] => false,
            [vertex] => angle_between(vertex, &p) <= ON_PATH_TOLERANCE,
            vertices => vertices
                .windows(2)
                .any(|edge| distance_to_edge(&p, &edge[0], &edge[1]) <= ON_PATH_TOLERANCE),
        }
    }

    /// Center of mass of the path. `None` for empty polylines, the only vertex for single point ones.
    pub fn centroid(&self) -> Option<Point> {
        // The integral of the unit vector along an edge points at its midpoint and has the length of its chord.
        let sum: Vector3<f64> = self
            .vertices
            .windows(2)
            .map(|edge| {
                (edge[0] + edge[1])
                    .try_normalize(0.0)
                    .map_or_else(Vector3::zeros, |middle| middle * (edge[0] - edge[1]).norm())
            })
            .sum();

        sum.try_normalize(0.0)
            .or_else(|| self.vertices.first().copied())
            .map(|v| point_from_vector(&v))
    }
}

/// Angular distance from `p` to the great circle arc `ab`.
fn distance_to_edge(p: &Vector3<f64>, a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    if let Some(normal) = a.cross(b).try_normalize(0.0) {
        // The closest point of the great circle is inside the arc.
        if p.dot(&normal.cross(a)) >= 0.0 && p.dot(&b.cross(&normal)) >= 0.0 {
            return p.dot(&normal).abs().min(1.0).asin();
        }
    }

    angle_between(p, a).min(angle_between(p, b))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn chord_angle_limits() {
        assert_eq!(ChordAngle::from_angle(-1.0), ChordAngle::ZERO);
        assert_eq!(ChordAngle::from_angle(4.0), ChordAngle::STRAIGHT);
        assert_abs_diff_eq!(
            ChordAngle::from_angle(std::f64::consts::FRAC_PI_2).length2(),
            2.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            ChordAngle::STRAIGHT.angle(),
            std::f64::consts::PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotate_around_pole() {
        let p = unit_vector(0.0, 0.0);
        let axis = unit_vector(std::f64::consts::FRAC_PI_2, 0.0);
        let rotated = rotate(&p, &axis, std::f64::consts::FRAC_PI_2);
        let point = point_from_vector(&rotated);

        assert_abs_diff_eq!(point.lat().degrees(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(point.lng().degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn cap_contains() {
        let center = Point::from_degrees(35.0, 139.0, 0.0, 0.0);
        let cap = Cap::new(center, ChordAngle::from_angle(1f64.to_radians()));

        assert!(cap.contains_point(&center));
        assert!(cap.contains_point(&Point::from_degrees(35.9, 139.0, 0.0, 0.0)));
        assert!(!cap.contains_point(&Point::from_degrees(36.1, 139.0, 0.0, 0.0)));
        assert!(!Cap::empty(center).contains_point(&center));
    }

    #[test]
    fn octant() {
        let x = Vector3::x();
        let y = Vector3::y();
        let z = Vector3::z();
        assert_abs_diff_eq!(triangle_area(&x, &y, &z), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(triangle_area(&x, &z, &y), -std::f64::consts::FRAC_PI_2, epsilon = 1e-12);

        let moment = triangle_moment(&x, &y, &z);
        for component in moment.iter() {
            assert_abs_diff_eq!(*component, std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        }

        let ring = [
            Point::from_degrees(0.0, 0.0, 0.0, 0.0),
            Point::from_degrees(90.0, 0.0, 0.0, 0.0),
            Point::from_degrees(0.0, 90.0, 0.0, 0.0),
        ];
        assert!(ring_area(&ring) < 0.0);

        let octant = Loop::new(&ring);
        assert_abs_diff_eq!(octant.area(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert!(octant.contains_point(&Point::from_degrees(30.0, 45.0, 0.0, 0.0)));
        assert!(!octant.contains_point(&Point::from_degrees(-10.0, 45.0, 0.0, 0.0)));
        assert!(!octant.contains_point(&Point::from_degrees(30.0, 135.0, 0.0, 0.0)));

        let centroid = octant.centroid().unwrap();
        assert_abs_diff_eq!(centroid.lat().degrees(), 35.26439, epsilon = 1e-5);
        assert_abs_diff_eq!(centroid.lng().degrees(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn polyline_distance() {
        let a = unit_vector(0.0, 0.0);
        let b = unit_vector(0.0, 0.5);
        let above = unit_vector(0.1, 0.25);
        let beyond = unit_vector(0.0, 0.7);

        assert_abs_diff_eq!(distance_to_edge(&above, &a, &b), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(distance_to_edge(&beyond, &a, &b), 0.2, epsilon = 1e-12);

        let line = Polyline::new(&[
            Point::from_degrees(0.0, 0.0, 0.0, 0.0),
            Point::from_degrees(0.0, 10.0, 0.0, 0.0),
        ]);
        assert!(line.contains_point(&Point::from_degrees(0.0, 5.0, 0.0, 0.0)));
        assert!(line.contains_point(&Point::from_degrees(0.0, 10.0, 0.0, 0.0)));
        assert!(!line.contains_point(&Point::from_degrees(0.001, 5.0, 0.0, 0.0)));
        assert!(!line.contains_point(&Point::from_degrees(0.0, 10.001, 0.0, 0.0)));

        let centroid = line.centroid().unwrap();
        assert_abs_diff_eq!(centroid.lng().degrees(), 5.0, epsilon = 1e-9);
        assert!(Polyline::new(&[]).centroid().is_none());
    }

    #[test]
    fn angle_between_vectors() {
        let a = unit_vector(0.0, 0.0);
        let b = unit_vector(0.0, std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(angle_between(&a, &b), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }
}
