//! Geometric Primitives and Operations

pub mod arc;
pub mod boolean;
pub mod contour;
pub mod patterns;
pub mod point;
pub mod primitives;
pub mod stroke;

// Re-export commonly used items
pub use boolean::{finalize, GeoOps, PolygonOps};
pub use contour::{Contour, Segment, Shape, Winding};
pub use point::CoordinateMapper;
pub use stroke::Polyline;
