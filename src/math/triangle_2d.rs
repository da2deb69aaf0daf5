use super::Point2;

/// Same-side sign test for `s` inside triangle `(a, b, c)`.
///
/// Works for either vertex order. Points on the triangle's boundary may go
/// either way; callers that care combine this with explicit on-segment checks.
#[must_use]
pub fn is_point_inside_triangle(s: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    let as_x = s.x - a.x;
    let as_y = s.y - a.y;

    let s_ab = (b.x - a.x) * as_y - (b.y - a.y) * as_x > 0.0;
    if ((c.x - a.x) * as_y - (c.y - a.y) * as_x > 0.0) == s_ab {
        return false;
    }
    if ((c.x - b.x) * (s.y - b.y) - (c.y - b.y) * (s.x - b.x) > 0.0) != s_ab {
        return false;
    }
    true
}
