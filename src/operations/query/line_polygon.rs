use super::crossing::count_crossings;
use crate::geometry::Polygon;
use crate::math::Segment;

/// Tests whether a segment crosses a polygon's boundary.
///
/// Reports boundary crossings only: a segment lying entirely inside or
/// entirely outside the polygon does not intersect it. Touching a convex
/// corner, ending on a vertex, or sliding along an edge are not crossings.
pub struct LinePolygonIntersect {
    segment: Segment,
}

impl LinePolygonIntersect {
    /// Creates a new intersection query for `segment`.
    #[must_use]
    pub fn new(segment: Segment) -> Self {
        Self { segment }
    }

    /// Executes the query against `polygon`, stopping at the first crossing.
    #[must_use]
    pub fn execute(&self, polygon: &Polygon) -> bool {
        let crossings = count_crossings(&self.segment, &polygon.canonical(), Some(1));
        tracing::trace!(
            from_x = self.segment.p1.x,
            from_y = self.segment.p1.y,
            to_x = self.segment.p2.x,
            to_y = self.segment.p2.y,
            crossings,
            "segment against polygon"
        );
        crossings > 0
    }
}
