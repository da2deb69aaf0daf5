use crate::math::predicates_2d::{is_point_on_segment, segments_intersect};
use crate::math::{Point2, Segment};

/// Checks whether extending a polyline to a new point makes it cross itself.
///
/// The candidate segment runs from the polyline's last point to `new_point`.
/// It must not touch any earlier non-adjacent segment, and it must not double
/// back onto the segment it continues. Placing `new_point` exactly on the
/// first point closes the ring; the first segment is then treated as adjacent.
pub struct PolylineSelfIntersect {
    new_point: Point2,
}

impl PolylineSelfIntersect {
    /// Creates a new self-intersection query for `new_point`.
    #[must_use]
    pub fn new(new_point: Point2) -> Self {
        Self { new_point }
    }

    /// Executes the query against the points traced so far.
    ///
    /// Polylines with fewer than two points never self-intersect.
    #[must_use]
    pub fn execute(&self, polyline: &[Point2]) -> bool {
        let n = polyline.len();
        if n < 2 {
            return false;
        }

        let last = polyline[n - 1];
        let new_segment = Segment::new(last, self.new_point);
        let closes_ring = n > 2 && polyline[0] == self.new_point;

        for (i, pair) in polyline[..n - 1].windows(2).enumerate() {
            let segment = Segment::new(pair[0], pair[1]);
            if closes_ring && i == 0 {
                if doubles_back(&segment.reversed(), &new_segment.reversed()) {
                    tracing::trace!(index = i, "closing segment folds onto first segment");
                    return true;
                }
                continue;
            }
            if segments_intersect(&new_segment, &segment) {
                tracing::trace!(index = i, "candidate segment crosses polyline");
                return true;
            }
        }

        doubles_back(&Segment::new(polyline[n - 2], last), &new_segment)
    }
}

/// `next` continues from `previous.p2`; checks whether it folds back onto it.
///
/// The pairwise test cannot tell this from ordinary adjacency because the
/// two segments always share an endpoint.
fn doubles_back(previous: &Segment, next: &Segment) -> bool {
    is_point_on_segment(previous, &next.p2) || is_point_on_segment(next, &previous.p1)
}
