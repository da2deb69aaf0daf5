//! Edge/vertex crossing classifier shared by the containment and line tests.
//!
//! Each polygon edge `(p1, p2)` is judged together with the vertices on either
//! side of it, so a touch at a vertex is seen with both of its adjacent edges.
//! A touch is attributed only to the edge that ends at the vertex, and a slide
//! along an edge only to the edge where the slide ends. Summed over a
//! canonical ring the per-edge answers never count a vertex twice.

use crate::math::predicates_2d::{is_point_on_segment, orientation, segments_intersect, Orientation};
use crate::math::triangle_2d::is_point_inside_triangle;
use crate::math::{Point2, Segment};

/// Shape of the polygon corner at an edge's end vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// The interior lies inside the wedge `(prev, vertex, next)`.
    Convex,
    /// The corner points into the polygon; the wedge is outside.
    Reflex,
}

impl Corner {
    /// Classifies the corner at `vertex` of a clockwise canonical ring.
    ///
    /// Convex corners of such a ring turn clockwise under
    /// [`orientation`]; only a counter-clockwise turn is reflex. Colinear
    /// corners are grouped with convex ones.
    #[must_use]
    pub fn at(prev: &Point2, vertex: &Point2, next: &Point2) -> Self {
        match orientation(prev, vertex, next) {
            Orientation::CounterClockwise => Self::Reflex,
            Orientation::Clockwise | Orientation::Colinear => Self::Convex,
        }
    }
}

/// Decides whether `line` crosses the polygon boundary once at this edge.
///
/// `edge` must come from a clockwise canonical ring, `prev` is the vertex
/// before `edge.p1` and `next` is the vertex following `edge.p2`.
#[must_use]
pub fn crosses_at_edge(line: &Segment, prev: &Point2, edge: &Segment, next: &Point2) -> bool {
    let start_on_line = is_point_on_segment(line, &edge.p1);
    let end_on_line = is_point_on_segment(line, &edge.p2);

    // A vertex touch belongs to the edge ending there.
    if start_on_line && !end_on_line {
        return false;
    }

    if is_point_on_segment(edge, &line.p1) {
        return crosses_from_rib(line, edge, next);
    }

    if end_on_line {
        return crosses_through_vertex(line, prev, edge, next);
    }

    !is_point_on_segment(edge, &line.p2) && segments_intersect(line, edge)
}

/// `line` passes through `edge.p2`.
fn crosses_through_vertex(line: &Segment, prev: &Point2, edge: &Segment, next: &Point2) -> bool {
    #[allow(clippy::float_cmp)]
    let stops_at_vertex = line.p2 == edge.p2;
    if stops_at_vertex {
        return false;
    }

    // Sliding onto the outgoing rib; the edge where the slide ends decides.
    if is_point_on_segment(line, next) {
        return false;
    }

    // Slid along the incoming rib, so the boundary arrived from `prev`.
    if is_point_on_segment(line, &edge.p1) {
        return on_opposite_sides(line, prev, next);
    }

    match Corner::at(&edge.p1, &edge.p2, next) {
        Corner::Reflex => on_opposite_sides(line, &edge.p1, next),
        Corner::Convex => {
            segments_intersect(line, &Segment::new(edge.p1, *next))
                || is_point_inside_triangle(&line.p2, &edge.p1, &edge.p2, next)
        }
    }
}

/// Whether `a` and `b` lie strictly on different sides of the line through `line`.
fn on_opposite_sides(line: &Segment, a: &Point2, b: &Point2) -> bool {
    matches!(
        (orientation(&line.p1, &line.p2, a), orientation(&line.p1, &line.p2, b)),
        (Orientation::Clockwise, Orientation::CounterClockwise)
            | (Orientation::CounterClockwise, Orientation::Clockwise)
    )
}

/// `line` starts on `edge`.
fn crosses_from_rib(line: &Segment, edge: &Segment, next: &Point2) -> bool {
    let chord = Segment::new(edge.p1, *next);
    let next_rib = Segment::new(edge.p2, *next);

    match Corner::at(&edge.p1, &edge.p2, next) {
        Corner::Reflex => {
            if segments_intersect(line, &chord) {
                return false;
            }
            !(is_point_inside_triangle(&line.p2, &edge.p1, &edge.p2, next)
                || is_point_on_segment(&next_rib, &line.p2)
                || is_point_on_segment(edge, &line.p2))
        }
        Corner::Convex => {
            if !is_point_on_segment(line, &edge.p1)
                && !is_point_on_segment(line, next)
                && segments_intersect(line, &chord)
            {
                return true;
            }

            let start_on_rib = is_point_on_segment(edge, &line.p1);
            let start_on_next_rib = is_point_on_segment(&next_rib, &line.p1);
            let end_on_rib = is_point_on_segment(edge, &line.p2);
            let end_on_next_rib = is_point_on_segment(&next_rib, &line.p2);

            let on_same_rib = (start_on_rib && end_on_rib) || (start_on_next_rib && end_on_next_rib);
            let on_different_ribs = !on_same_rib
                && ((start_on_rib && end_on_next_rib) || (end_on_rib && start_on_next_rib));

            on_different_ribs || is_point_inside_triangle(&line.p2, &edge.p1, &edge.p2, next)
        }
    }
}

/// Counts boundary crossings of `line` against the closed vertex ring.
///
/// Stops early once `max_crossings` is reached; `None` walks every edge.
#[must_use]
pub fn count_crossings(line: &Segment, ring: &[Point2], max_crossings: Option<usize>) -> usize {
    let n = ring.len();
    let mut crossings = 0;
    for i in 0..n {
        if max_crossings.is_some_and(|max| crossings >= max) {
            break;
        }
        let edge = Segment::new(ring[i], ring[(i + 1) % n]);
        if crosses_at_edge(line, &ring[(i + n - 1) % n], &edge, &ring[(i + 2) % n]) {
            crossings += 1;
        }
    }
    crossings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(p(x1, y1), p(x2, y2))
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    }

    fn l_shape() -> Vec<Point2> {
        vec![
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 5.0),
            p(5.0, 5.0),
            p(5.0, 10.0),
            p(0.0, 10.0),
        ]
    }

    #[test]
    fn corners_of_canonical_l_shape() {
        let ring = l_shape();
        assert_eq!(Corner::at(&ring[0], &ring[1], &ring[2]), Corner::Convex);
        assert_eq!(Corner::at(&ring[2], &ring[3], &ring[4]), Corner::Reflex);
    }

    #[test]
    fn plain_crossing_through_edge_interior() {
        let line = seg(5.0, 5.0, 15.0, 5.0);
        assert!(crosses_at_edge(&line, &p(0.0, 0.0), &seg(10.0, 0.0, 10.0, 10.0), &p(0.0, 10.0)));
    }

    #[test]
    fn touch_at_start_vertex_is_left_to_previous_edge() {
        // (10, 10) starts this edge; the edge ending there owns the touch.
        let line = seg(5.0, 5.0, 15.0, 15.0);
        assert!(!crosses_at_edge(&line, &p(10.0, 0.0), &seg(10.0, 10.0, 0.0, 10.0), &p(0.0, 0.0)));
        assert!(crosses_at_edge(&line, &p(0.0, 0.0), &seg(10.0, 0.0, 10.0, 10.0), &p(0.0, 10.0)));
    }

    #[test]
    fn convex_vertex_tangent_touch_is_not_a_crossing() {
        // Diamond corner (5, 0) grazed by a horizontal line below the shape.
        let line = seg(20.0, 0.0, -5.0, 0.0);
        assert!(!crosses_at_edge(&line, &p(5.0, 10.0), &seg(0.0, 5.0, 5.0, 0.0), &p(10.0, 5.0)));
    }

    #[test]
    fn line_ending_on_convex_vertex_is_not_a_crossing() {
        let line = seg(15.0, 15.0, 10.0, 10.0);
        assert!(!crosses_at_edge(&line, &p(0.0, 0.0), &seg(10.0, 0.0, 10.0, 10.0), &p(0.0, 10.0)));
    }

    #[test]
    fn reflex_vertex_pass_is_a_crossing() {
        let line = seg(8.0, 8.0, 4.0, 4.0);
        assert!(crosses_at_edge(&line, &p(10.0, 0.0), &seg(10.0, 5.0, 5.0, 5.0), &p(5.0, 10.0)));
    }

    #[test]
    fn reflex_vertex_tangent_touch_is_not_a_crossing() {
        // Stays in the L's interior and only touches the notch corner (5, 5).
        let line = seg(3.0, 7.0, 7.0, 3.0);
        assert!(!crosses_at_edge(&line, &p(10.0, 0.0), &seg(10.0, 5.0, 5.0, 5.0), &p(5.0, 10.0)));
    }

    #[test]
    fn slide_onto_outgoing_rib_is_left_to_the_next_edge() {
        let line = seg(20.0, 5.0, -3.0, 5.0);
        assert!(!crosses_at_edge(&line, &p(10.0, 10.0), &seg(5.0, 10.0, 5.0, 5.0), &p(0.0, 5.0)));
        assert!(!crosses_at_edge(&line, &p(0.0, 0.0), &seg(10.0, 0.0, 10.0, 5.0), &p(5.0, 5.0)));
    }

    #[test]
    fn slide_ending_where_boundary_changes_side_is_a_crossing() {
        // Convex start, reflex end.
        let line = seg(20.0, 5.0, 2.0, 5.0);
        assert!(crosses_at_edge(&line, &p(10.0, 0.0), &seg(10.0, 5.0, 5.0, 5.0), &p(5.0, 10.0)));
        // Reflex start, convex end.
        let line = seg(20.0, 5.0, -3.0, 5.0);
        assert!(crosses_at_edge(&line, &p(5.0, 10.0), &seg(5.0, 5.0, 0.0, 5.0), &p(0.0, 0.0)));
    }

    #[test]
    fn slide_along_notch_floor_is_not_a_crossing() {
        let line = seg(12.0, 4.0, 5.0, 4.0);
        assert!(!crosses_at_edge(&line, &p(9.0, 9.0), &seg(9.0, 4.0, 7.0, 4.0), &p(7.0, 9.0)));
    }

    #[test]
    fn line_ending_on_reflex_vertex_is_not_a_crossing() {
        let line = seg(8.0, 8.0, 5.0, 5.0);
        assert!(!crosses_at_edge(&line, &p(10.0, 0.0), &seg(10.0, 5.0, 5.0, 5.0), &p(5.0, 10.0)));
    }

    #[test]
    fn from_rib_into_notch_is_not_a_crossing() {
        let line = seg(7.0, 5.0, 9.0, 9.0);
        assert!(!crosses_at_edge(&line, &p(10.0, 0.0), &seg(10.0, 5.0, 5.0, 5.0), &p(5.0, 10.0)));
    }

    #[test]
    fn from_rib_into_interior_next_to_reflex_corner_is_a_crossing() {
        let line = seg(7.0, 5.0, 7.0, 2.0);
        assert!(crosses_at_edge(&line, &p(10.0, 0.0), &seg(10.0, 5.0, 5.0, 5.0), &p(5.0, 10.0)));
    }

    #[test]
    fn from_rib_into_convex_corner_is_a_crossing() {
        let line = seg(5.0, 0.0, 9.0, 1.0);
        assert!(crosses_at_edge(&line, &p(0.0, 10.0), &seg(0.0, 0.0, 10.0, 0.0), &p(10.0, 10.0)));
    }

    #[test]
    fn from_rib_outwards_is_not_a_crossing() {
        let line = seg(5.0, 0.0, 9.0, -3.0);
        assert!(!crosses_at_edge(&line, &p(0.0, 10.0), &seg(0.0, 0.0, 10.0, 0.0), &p(10.0, 10.0)));
    }

    #[test]
    fn sliding_along_a_rib_is_not_a_crossing() {
        let line = seg(2.0, 0.0, 8.0, 0.0);
        assert!(!crosses_at_edge(&line, &p(0.0, 10.0), &seg(0.0, 0.0, 10.0, 0.0), &p(10.0, 10.0)));
    }

    #[test]
    fn from_one_rib_to_the_next_is_a_crossing() {
        let line = seg(5.0, 0.0, 10.0, 5.0);
        assert!(crosses_at_edge(&line, &p(0.0, 10.0), &seg(0.0, 0.0, 10.0, 0.0), &p(10.0, 10.0)));
    }

    #[test]
    fn count_stops_at_limit() {
        let line = seg(-5.0, 5.0, 15.0, 5.0);
        assert_eq!(count_crossings(&line, &square(), None), 2);
        assert_eq!(count_crossings(&line, &square(), Some(1)), 1);
        assert_eq!(count_crossings(&line, &square(), Some(0)), 0);
    }

    #[test]
    fn count_ignores_reflex_tangent_touch() {
        let line = seg(3.0, 7.0, 7.0, 3.0);
        assert_eq!(count_crossings(&line, &l_shape(), None), 0);
    }

    #[test]
    fn count_through_l_shape_slide() {
        // Horizontal ray from far right along y = 5 ending inside the lower arm.
        let ray = Segment::new(p(crate::math::RAY_FAR_X, 5.0), p(2.0, 5.0));
        assert_eq!(count_crossings(&ray, &l_shape(), None), 1);
    }
}
