pub mod polygon_2d;
pub mod predicates_2d;
pub mod triangle_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Absolute tolerance for point-on-segment tests, in input coordinate units.
///
/// A point whose vertical deviation from a segment's line is below this value
/// is treated as lying exactly on the segment.
pub const EPSILON: f64 = 0.01;

/// X coordinate of the far end of the horizontal containment ray.
pub const RAY_FAR_X: f64 = f64::MAX * 0.9;

/// Minimum number of vertices a polygon must have.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A directed 2D segment from `p1` to `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment {
    /// Creates a segment from `p1` to `p2`.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Returns the same segment walked from `p2` to `p1`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }
}
