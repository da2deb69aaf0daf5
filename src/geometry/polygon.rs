use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{to_clockwise, winding};
use crate::math::predicates_2d::{is_point_on_segment, Orientation};
use crate::math::{Point2, Segment, MIN_POLYGON_VERTICES};

/// A simple polygon, implicitly closed from the last vertex back to the first.
///
/// Vertex order and winding are kept exactly as supplied. Simplicity
/// (no self-intersections) is the caller's responsibility and is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if fewer than three vertices
    /// are given.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            tracing::warn!(vertices = vertices.len(), "rejected polygon");
            return Err(GeometryError::InvalidArgument(format!(
                "polygon needs at least {MIN_POLYGON_VERTICES} vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        Ok(Self { vertices })
    }

    /// Vertices in the caller's order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Boundary edges, including the closing edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the same polygon with the opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    /// Winding of the vertices as supplied.
    #[must_use]
    pub fn winding(&self) -> Orientation {
        winding(&self.vertices)
    }

    /// Clockwise vertex ring without redundant vertices.
    ///
    /// May hold fewer than three points when the polygon is degenerate.
    #[must_use]
    pub fn canonical(&self) -> Vec<Point2> {
        to_clockwise(&self.vertices)
    }

    /// Checks whether `point` lies on any boundary edge, within tolerance.
    #[must_use]
    pub fn contains_on_boundary(&self, point: &Point2) -> bool {
        self.edges().any(|edge| is_point_on_segment(&edge, point))
    }
}

impl TryFrom<&[Point2]> for Polygon {
    type Error = crate::error::ZoneError;

    fn try_from(points: &[Point2]) -> Result<Self> {
        Self::new(points.to_vec())
    }
}
