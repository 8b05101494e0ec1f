use crate::point::Point;
use crate::sphere::{Cap, Loop, Polyline};

/// Part of the Earth's surface a geometry occupies. All regions are evaluated on the unit sphere.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// Single point.
    Point(Point),
    /// Great circle path through the vertices.
    Polyline(Polyline),
    /// Area bounded by a counterclockwise ring.
    Loop(Loop),
    /// Spherical cap around a center point.
    Cap(Cap),
}

impl Region {
    /// Whether the point belongs to the region. Loops and caps contain their interior.
    ///
    /// Polylines contain the points lying on the path, vertices and endpoints included. This differs from the usual
    /// spherical geometry convention, where a polyline has no interior and contains no points.
    pub fn contains_point(&self, point: &Point) -> bool {
        match self {
            Region::Point(p) => p.same_coordinate(point),
            Region::Polyline(line) => line.contains_point(point),
            Region::Loop(ring) => ring.contains_point(point),
            Region::Cap(cap) => cap.contains_point(point),
        }
    }

    /// Center of mass of the region, `None` for empty regions.
    pub fn centroid(&self) -> Option<Point> {
        match self {
            Region::Point(p) => Some(*p),
            Region::Polyline(line) => line.centroid(),
            Region::Loop(ring) => ring.centroid(),
            Region::Cap(cap) => (!cap.is_empty()).then(|| *cap.center()),
        }
    }
}
