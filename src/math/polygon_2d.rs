use super::predicates_2d::{is_point_on_segment, orientation_from_determinant, Orientation};
use super::{Point2, Segment};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Winding of a closed polygon, in the same sign convention as
/// [`orientation`](super::predicates_2d::orientation).
///
/// Sums the orientation determinant over the whole ring instead of sampling a
/// single corner, so a reflex first vertex does not flip the answer. For a
/// polygon whose first vertex is convex this matches
/// `orientation(v0, v1, v_last)`.
#[must_use]
pub fn winding(points: &[Point2]) -> Orientation {
    // The orientation determinant of a triangle is minus twice its shoelace area.
    orientation_from_determinant(-signed_area_2d(points))
}

/// Index of the vertex with the smallest x, ties broken by smallest y.
///
/// This vertex is always a corner of the polygon, never the middle of a
/// colinear run.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn canonical_start(points: &[Point2]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x || (pt.x == b.x && pt.y < b.y) {
            best = i;
        }
    }
    best
}

/// Walks the ring from [`canonical_start`] and drops every vertex lying on the
/// segment between the last kept vertex and the vertex after it.
///
/// Collapses colinear runs and repeated points. The start vertex is always
/// kept, so the result is never empty for non-empty input.
#[must_use]
pub fn remove_redundant_vertices(points: &[Point2]) -> Vec<Point2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let start = canonical_start(points);
    let mut last = points[start];
    let mut kept = Vec::with_capacity(n);
    kept.push(last);

    for step in 1..n {
        let current = points[(start + step) % n];
        let next = points[(start + step + 1) % n];
        if is_point_on_segment(&Segment::new(last, next), &current) {
            continue;
        }
        kept.push(current);
        last = current;
    }
    kept
}

/// Canonical form consumed by the crossing classifier.
///
/// Redundant vertices are removed and the ring is made [`Orientation::Clockwise`]
/// by reversing it about its start vertex, so the start stays first and
/// canonicalizing an already canonical ring returns it unchanged.
#[must_use]
pub fn to_clockwise(points: &[Point2]) -> Vec<Point2> {
    let mut ring = remove_redundant_vertices(points);
    if winding(points) == Orientation::CounterClockwise && ring.len() > 1 {
        ring[1..].reverse();
    }
    if ring.len() != points.len() {
        tracing::debug!(
            before = points.len(),
            after = ring.len(),
            "dropped redundant polygon vertices"
        );
    }
    ring
}
