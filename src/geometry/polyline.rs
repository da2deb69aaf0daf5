use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::{Point2, Segment, MIN_POLYGON_VERTICES};
use crate::operations::query::PolylineSelfIntersect;

/// An open polyline being traced point by point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Creates an empty polyline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing points without validating them.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Traced points in drawing order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of traced points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Segments between consecutive points, in drawing order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Checks whether extending the polyline to `point` would make it cross itself.
    #[must_use]
    pub fn would_self_intersect(&self, point: &Point2) -> bool {
        PolylineSelfIntersect::new(*point).execute(&self.points)
    }

    /// Appends `point` unless the new segment would self-intersect.
    ///
    /// Returns whether the point was accepted.
    pub fn try_push(&mut self, point: Point2) -> bool {
        if self.would_self_intersect(&point) {
            tracing::debug!(x = point.x, y = point.y, "rejected polyline vertex");
            return false;
        }
        self.points.push(point);
        true
    }

    /// Checks whether the closing segment back to the first point is valid.
    #[must_use]
    pub fn can_close(&self) -> bool {
        match self.points.first() {
            Some(first) if self.points.len() >= MIN_POLYGON_VERTICES => {
                !self.would_self_intersect(first)
            }
            _ => false,
        }
    }

    /// Turns the traced points into a polygon.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if fewer than three points were traced.
    pub fn into_polygon(self) -> Result<Polygon> {
        Polygon::new(self.points)
    }
}
