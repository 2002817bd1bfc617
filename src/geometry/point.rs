//! `Point2`: an integer-coordinate point with structural equality
//!
//! Two points are equal iff both coordinates match, and hashing follows the
//! same rule, so `Point2` can key hash maps directly. The type is a plain
//! `Copy` value; nothing mutates a point after construction.
//!
//! This module provides:
//! - The `Point2` value type with `repr(C)` layout (two `i64`s, no padding).
//! - Conversions to and from `(i64, i64)` tuples and `[i64; 2]` arrays.
//! - `Debug`/`Display` implementations that render as `(x, y)`.

use std::fmt;

/// An ordered pair of integer coordinates `(x, y)`.
///
/// # Memory layout
/// `repr(C)` with two `i64` fields, so a `&[Point2]` can be viewed as a flat
/// `&[i64]` of interleaved coordinates via `bytemuck`.
#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    bytemuck::Pod,
    bytemuck::Zeroable,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(C)]
pub struct Point2 {
    pub x: i64,
    pub y: i64,
}

impl Point2 {
    /// Creates a point from its two coordinates.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mesh_weld::geometry::point::Point2;
    /// let p = Point2::new(2, -3);
    /// assert_eq!((p.x, p.y), (2, -3));
    /// ```
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Coordinates as a tuple.
    #[inline]
    pub const fn to_tuple(self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Views a slice of points as interleaved `x, y` coordinates.
    #[inline]
    pub fn flatten(points: &[Point2]) -> &[i64] {
        bytemuck::cast_slice(points)
    }
}

impl From<(i64, i64)> for Point2 {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i64; 2]> for Point2 {
    #[inline]
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for (i64, i64) {
    #[inline]
    fn from(p: Point2) -> Self {
        p.to_tuple()
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Renders as a coordinate tuple, `(x, y)`.
impl fmt::Debug for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn structural_equality_and_hash() {
        let a = Point2::new(0, 0);
        let b = Point2::from((0, 0));
        let c = Point2::new(1, 0);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn tuple_and_array_conversions() {
        let p = Point2::from([4, -7]);
        assert_eq!(p, Point2::new(4, -7));
        let t: (i64, i64) = p.into();
        assert_eq!(t, (4, -7));
    }

    #[test]
    fn debug_and_display() {
        let p = Point2::new(2, 2);
        assert_eq!(format!("{:?}", p), "(2, 2)");
        assert_eq!(format!("{}", p), "(2, 2)");
    }

    #[test]
    fn flatten_interleaves_coordinates() {
        let pts = [Point2::new(1, 2), Point2::new(3, 4)];
        assert_eq!(Point2::flatten(&pts), &[1, 2, 3, 4]);
    }
}
