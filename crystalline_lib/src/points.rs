use serde::{Deserialize, Serialize};

/// Two-dimensional point with integer coordinates.
/// This is the type to use for positions on a grid, like cells or pixels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Point2I {
    pub x: i32,
    pub y: i32,
}

impl Point2I {
    /// Point at the center of the coordinate grid.
    pub const ORIGIN: Point2I = Point2I { x: 0, y: 0 };

    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Point2I { x, y }
    }
}

/// Three-dimensional point with integer coordinates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Point3I {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3I {
    pub const ORIGIN: Point3I = Point3I { x: 0, y: 0, z: 0 };

    #[must_use]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Point3I { x, y, z }
    }
}

/// Two-dimensional point with floating-point coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }
}

/// Three-dimensional point with floating-point coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3D { x, y, z }
    }
}

impl From<Point2I> for Point2D {
    fn from(p: Point2I) -> Self {
        Point2D::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<Point3I> for Point3D {
    fn from(p: Point3I) -> Self {
        Point3D::new(f64::from(p.x), f64::from(p.y), f64::from(p.z))
    }
}

impl ::core::fmt::Display for Point2I {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl ::core::fmt::Display for Point3I {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl ::core::fmt::Display for Point2D {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl ::core::fmt::Display for Point3D {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
