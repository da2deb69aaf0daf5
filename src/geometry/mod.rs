pub mod polygon;
pub mod polyline;

pub use polygon::Polygon;
pub use polyline::Polyline;
