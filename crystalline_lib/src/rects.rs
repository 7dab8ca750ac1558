//! Axis-aligned rectangles and boxes.
//!
//! The integer variants are made of one [`Range`] per axis, so they are
//! half-open like ranges: `Rect2I::new(0, 0, 2, 2)` covers the four grid
//! points `(0, 0)`, `(1, 0)`, `(0, 1)` and `(1, 1)`, but not `(2, 2)`.

use crate::errors::Error;
use crate::lines::{Line2I, Line3I};
use crate::points::{Point2D, Point2I, Point3D, Point3I};
use crate::ranges::Range;
use itertools::{iproduct, Itertools};
use serde::{Deserialize, Serialize};

/// The range `[origin, origin + extent)`.
/// Fails if the extent is not positive, or the end does not fit in an i32.
fn axis(origin: i32, extent: i32) -> Result<Range, Error> {
    match origin.checked_add(extent) {
        Some(end) => Range::new(origin, end),
        None => Err(Error::InvalidRange {
            start: origin,
            end: origin.saturating_add(extent),
        }),
    }
}

/// Check that a float extent can be used for a rectangle
fn extent(value: f64) -> Result<f64, Error> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidExtent(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect2I {
    x: Range,
    y: Range,
}

impl Rect2I {
    /// A rectangle with its top-left corner at `(x, y)`.
    /// Both `width` and `height` must be greater than zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, Error> {
        Ok(Rect2I {
            x: axis(x, width)?,
            y: axis(y, height)?,
        })
    }

    #[must_use]
    pub fn from_ranges(x: Range, y: Range) -> Self {
        Rect2I { x, y }
    }

    #[must_use]
    pub fn x_range(&self) -> Range {
        self.x
    }

    #[must_use]
    pub fn y_range(&self) -> Range {
        self.y
    }

    #[must_use]
    pub fn origin(&self) -> Point2I {
        Point2I::new(self.x.start(), self.y.start())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.x.count()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.y.count()
    }

    /// Number of grid points covered by the rectangle
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    #[must_use]
    pub fn contains_point(&self, point: &Point2I) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    /// Since rectangles are convex, a segment is inside when both of its
    /// ends are.
    #[must_use]
    pub fn contains_line(&self, line: &Line2I) -> bool {
        self.contains_point(&line.start) && self.contains_point(&line.end)
    }

    #[must_use]
    pub fn contains_rect(&self, other: &Rect2I) -> bool {
        self.x.contains_range(&other.x) && self.y.contains_range(&other.y)
    }

    /// Whether the two rectangles share at least one grid point.  As with
    /// ranges, rectangles that only touch do not intersect.
    #[must_use]
    pub fn intersects_rect(&self, other: &Rect2I) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y)
    }

    #[must_use]
    pub fn intersection(&self, other: &Rect2I) -> Option<Rect2I> {
        Some(Rect2I {
            x: self.x.intersection(&other.x)?,
            y: self.y.intersection(&other.y)?,
        })
    }

    /// All grid points in the rectangle, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point2I> {
        self.y
            .iter()
            .cartesian_product(self.x.iter())
            .map(|(y, x)| Point2I::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect3I {
    x: Range,
    y: Range,
    z: Range,
}

impl Rect3I {
    pub fn new(
        x: i32,
        y: i32,
        z: i32,
        width: i32,
        height: i32,
        depth: i32,
    ) -> Result<Self, Error> {
        Ok(Rect3I {
            x: axis(x, width)?,
            y: axis(y, height)?,
            z: axis(z, depth)?,
        })
    }

    #[must_use]
    pub fn from_ranges(x: Range, y: Range, z: Range) -> Self {
        Rect3I { x, y, z }
    }

    #[must_use]
    pub fn x_range(&self) -> Range {
        self.x
    }

    #[must_use]
    pub fn y_range(&self) -> Range {
        self.y
    }

    #[must_use]
    pub fn z_range(&self) -> Range {
        self.z
    }

    #[must_use]
    pub fn origin(&self) -> Point3I {
        Point3I::new(self.x.start(), self.y.start(), self.z.start())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.x.count()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.y.count()
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.z.count()
    }

    #[must_use]
    pub fn volume(&self) -> u128 {
        u128::from(self.width())
            * u128::from(self.height())
            * u128::from(self.depth())
    }

    #[must_use]
    pub fn contains_point(&self, point: &Point3I) -> bool {
        self.x.contains(point.x)
            && self.y.contains(point.y)
            && self.z.contains(point.z)
    }

    /// Both ends of the segment are in the box
    #[must_use]
    pub fn contains_line(&self, line: &Line3I) -> bool {
        self.contains_point(&line.start) && self.contains_point(&line.end)
    }

    #[must_use]
    pub fn contains_rect(&self, other: &Rect3I) -> bool {
        self.x.contains_range(&other.x)
            && self.y.contains_range(&other.y)
            && self.z.contains_range(&other.z)
    }

    #[must_use]
    pub fn intersects_rect(&self, other: &Rect3I) -> bool {
        self.x.overlaps(&other.x)
            && self.y.overlaps(&other.y)
            && self.z.overlaps(&other.z)
    }

    #[must_use]
    pub fn intersection(&self, other: &Rect3I) -> Option<Rect3I> {
        Some(Rect3I {
            x: self.x.intersection(&other.x)?,
            y: self.y.intersection(&other.y)?,
            z: self.z.intersection(&other.z)?,
        })
    }

    /// All lattice points in the box, layer by layer then row by row.
    pub fn points(&self) -> impl Iterator<Item = Point3I> {
        iproduct!(self.z.iter(), self.y.iter(), self.x.iter())
            .map(|(z, y, x)| Point3I::new(x, y, z))
    }
}

/// A rectangle with floating-point coordinates.
/// Its width and height are always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2D {
    origin: Point2D,
    width: f64,
    height: f64,
}

impl Rect2D {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, Error> {
        Ok(Rect2D {
            origin: Point2D::new(x, y),
            width: extent(width)?,
            height: extent(height)?,
        })
    }

    /// The rectangle with the two points as opposite corners, in any
    /// order.
    pub fn from_corners(a: Point2D, b: Point2D) -> Result<Self, Error> {
        Rect2D::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    #[must_use]
    pub fn origin(&self) -> Point2D {
        self.origin
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The corner opposite to the origin
    #[must_use]
    pub fn far_corner(&self) -> Point2D {
        Point2D::new(self.origin.x + self.width, self.origin.y + self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect3D {
    origin: Point3D,
    width: f64,
    height: f64,
    depth: f64,
}

impl Rect3D {
    pub fn new(
        x: f64,
        y: f64,
        z: f64,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<Self, Error> {
        Ok(Rect3D {
            origin: Point3D::new(x, y, z),
            width: extent(width)?,
            height: extent(height)?,
            depth: extent(depth)?,
        })
    }

    pub fn from_corners(a: Point3D, b: Point3D) -> Result<Self, Error> {
        Rect3D::new(
            a.x.min(b.x),
            a.y.min(b.y),
            a.z.min(b.z),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
            (a.z - b.z).abs(),
        )
    }

    #[must_use]
    pub fn origin(&self) -> Point3D {
        self.origin
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    #[must_use]
    pub fn far_corner(&self) -> Point3D {
        Point3D::new(
            self.origin.x + self.width,
            self.origin.y + self.height,
            self.origin.z + self.depth,
        )
    }
}

impl ::core::fmt::Display for Rect2I {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{} x {}", self.x, self.y)
    }
}

impl ::core::fmt::Display for Rect3I {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{} x {} x {}", self.x, self.y, self.z)
    }
}

impl ::core::fmt::Display for Rect2D {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{} to {}", self.origin, self.far_corner())
    }
}

impl ::core::fmt::Display for Rect3D {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{} to {}", self.origin, self.far_corner())
    }
}
