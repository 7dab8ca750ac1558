use crate::points::{Point2D, Point2I, Point3D, Point3I};
use serde::{Deserialize, Serialize};

/// A segment between two grid points.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Line2I {
    pub start: Point2I,
    pub end: Point2I,
}

impl Line2I {
    #[must_use]
    pub fn new(start: Point2I, end: Point2I) -> Self {
        Line2I { start, end }
    }
}

/// A segment between two lattice points in space.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Line3I {
    pub start: Point3I,
    pub end: Point3I,
}

impl Line3I {
    #[must_use]
    pub fn new(start: Point3I, end: Point3I) -> Self {
        Line3I { start, end }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line2D {
    pub start: Point2D,
    pub end: Point2D,
}

impl Line2D {
    #[must_use]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Line2D { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line3D {
    pub start: Point3D,
    pub end: Point3D,
}

impl Line3D {
    #[must_use]
    pub fn new(start: Point3D, end: Point3D) -> Self {
        Line3D { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let dz = self.end.z - self.start.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl ::core::fmt::Display for Line2I {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

impl ::core::fmt::Display for Line3I {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

impl ::core::fmt::Display for Line2D {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

impl ::core::fmt::Display for Line3D {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
