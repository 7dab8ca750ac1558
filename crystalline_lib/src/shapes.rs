use crate::errors::Error;
use crate::points::{Point2D, Point3D};

fn check_radius(value: f64) -> Result<f64, Error> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidRadius(value))
    }
}

/// A triangle formed from three connected points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tri2D {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl Tri2D {
    #[must_use]
    pub fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Tri2D { a, b, c }
    }

    #[must_use]
    pub fn vertices(&self) -> [Point2D; 3] {
        [self.a, self.b, self.c]
    }
}

/// A triangle in space.  It lies on its own plane, so it is never able to
/// contain anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tri3D {
    pub a: Point3D,
    pub b: Point3D,
    pub c: Point3D,
}

impl Tri3D {
    #[must_use]
    pub fn new(a: Point3D, b: Point3D, c: Point3D) -> Self {
        Tri3D { a, b, c }
    }

    #[must_use]
    pub fn vertices(&self) -> [Point3D; 3] {
        [self.a, self.b, self.c]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2D,
    radius: f64,
}

impl Circle {
    /// The radius must be positive and finite
    pub fn new(center: Point2D, radius: f64) -> Result<Self, Error> {
        Ok(Circle {
            center,
            radius: check_radius(radius)?,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point2D {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3D,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point3D, radius: f64) -> Result<Self, Error> {
        Ok(Sphere {
            center,
            radius: check_radius(radius)?,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point3D {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl ::core::fmt::Display for Circle {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "circle {} r={}", self.center, self.radius)
    }
}

impl ::core::fmt::Display for Sphere {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "sphere {} r={}", self.center, self.radius)
    }
}
