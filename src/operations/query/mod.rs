pub mod crossing;
mod line_polygon;
mod point_in_polygon;
mod polyline_self_intersect;

pub use crossing::{count_crossings, Corner};
pub use line_polygon::LinePolygonIntersect;
pub use point_in_polygon::PointInPolygon;
pub use polyline_self_intersect::PolylineSelfIntersect;
