//! Geometry value types for mesh-weld.

pub mod point;

pub use point::Point2;
