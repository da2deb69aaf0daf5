use super::crossing::count_crossings;
use crate::geometry::Polygon;
use crate::math::{Point2, Segment, RAY_FAR_X};

/// Tests whether a point lies strictly inside a polygon.
///
/// Points on the boundary (within tolerance) count as outside. The interior
/// is decided by the parity of crossings along a horizontal ray cast from the
/// far right towards the point, over the polygon's canonical ring.
pub struct PointInPolygon {
    point: Point2,
}

impl PointInPolygon {
    /// Creates a new containment query for `point`.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query against `polygon`.
    #[must_use]
    pub fn execute(&self, polygon: &Polygon) -> bool {
        if polygon.contains_on_boundary(&self.point) {
            tracing::trace!(x = self.point.x, y = self.point.y, "point on polygon boundary");
            return false;
        }

        let ray = Segment::new(Point2::new(RAY_FAR_X, self.point.y), self.point);
        let crossings = count_crossings(&ray, &polygon.canonical(), None);
        tracing::trace!(x = self.point.x, y = self.point.y, crossings, "point containment ray cast");
        crossings % 2 == 1
    }
}
