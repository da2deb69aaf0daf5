use super::{Point2, Segment, EPSILON};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the ordered triple `(p, q, r)`.
///
/// Computed from the sign of `(q.y - p.y)(r.x - q.x) - (q.x - p.x)(r.y - q.y)`:
/// zero is [`Orientation::Colinear`], negative is [`Orientation::Clockwise`],
/// positive is [`Orientation::CounterClockwise`]. The comparison is exact.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    orientation_from_determinant(orientation_determinant(p, q, r))
}

/// Raw determinant behind [`orientation`].
#[must_use]
pub fn orientation_determinant(p: &Point2, q: &Point2, r: &Point2) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Maps a determinant sign onto an [`Orientation`].
///
/// NaN (from infinite coordinates) is neither zero nor negative and lands on
/// `CounterClockwise`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn orientation_from_determinant(value: f64) -> Orientation {
    if value == 0.0 {
        Orientation::Colinear
    } else if value < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Checks whether `q` lies inside the closed bounding box of `segment`.
///
/// Only meaningful when `q` is already known to be colinear with the segment.
#[must_use]
pub fn on_colinear_segment(segment: &Segment, q: &Point2) -> bool {
    q.x <= segment.p1.x.max(segment.p2.x)
        && q.x >= segment.p1.x.min(segment.p2.x)
        && q.y <= segment.p1.y.max(segment.p2.y)
        && q.y >= segment.p1.y.min(segment.p2.y)
}

/// Tolerant point-on-segment test.
///
/// Rejects points outside the segment's x range. A vertical segment accepts
/// any point inside its y range; any other segment accepts a point whose
/// vertical deviation from the segment's line is below [`EPSILON`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_point_on_segment(segment: &Segment, p: &Point2) -> bool {
    let (left, right) = if segment.p1.x <= segment.p2.x {
        (segment.p1, segment.p2)
    } else {
        (segment.p2, segment.p1)
    };

    if p.x < left.x || p.x > right.x {
        return false;
    }

    if left.x == right.x {
        return left.y.min(right.y) <= p.y && left.y.max(right.y) >= p.y;
    }

    let slope = (right.y - left.y) / (right.x - left.x);
    let intercept = left.y - slope * left.x;
    (slope * p.x + intercept - p.y).abs() < EPSILON
}

/// Tests whether two segments share at least one point.
///
/// General case: each segment's endpoints lie strictly on opposite sides of
/// the other. Colinear touches and overlaps count as intersecting.
#[must_use]
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    let o1 = orientation(&a.p1, &a.p2, &b.p1);
    let o2 = orientation(&a.p1, &a.p2, &b.p2);
    let o3 = orientation(&b.p1, &b.p2, &a.p1);
    let o4 = orientation(&b.p1, &b.p2, &a.p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Colinear && on_colinear_segment(a, &b.p1))
        || (o2 == Orientation::Colinear && on_colinear_segment(a, &b.p2))
        || (o3 == Orientation::Colinear && on_colinear_segment(b, &a.p1))
        || (o4 == Orientation::Colinear && on_colinear_segment(b, &a.p2))
}
