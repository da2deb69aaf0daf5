pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod zone;

pub use error::{GeometryError, Result, ZoneError};
pub use geometry::{Polygon, Polyline};
pub use math::{Point2, Segment, EPSILON};
pub use zone::{is_line_intersects_polygon, is_point_inside_polygon, is_polyline_self_intersected};
