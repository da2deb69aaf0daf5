//! Slice-based entry points for callers that hold raw point lists.

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::{Point2, Segment};
use crate::operations::query::{LinePolygonIntersect, PointInPolygon, PolylineSelfIntersect};

/// Tests whether `point` lies strictly inside `polygon`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` if `polygon` has fewer than three vertices.
pub fn is_point_inside_polygon(point: &Point2, polygon: &[Point2]) -> Result<bool> {
    let polygon = Polygon::try_from(polygon)?;
    Ok(PointInPolygon::new(*point).execute(&polygon))
}

/// Tests whether `segment` crosses the boundary of `polygon`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` if `polygon` has fewer than three vertices.
pub fn is_line_intersects_polygon(segment: &Segment, polygon: &[Point2]) -> Result<bool> {
    let polygon = Polygon::try_from(polygon)?;
    Ok(LinePolygonIntersect::new(*segment).execute(&polygon))
}

/// Tests whether extending `polyline` to `new_point` makes it cross itself.
#[must_use]
pub fn is_polyline_self_intersected(polyline: &[Point2], new_point: &Point2) -> bool {
    PolylineSelfIntersect::new(*new_point).execute(polyline)
}
