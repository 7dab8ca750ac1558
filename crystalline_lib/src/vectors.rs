//! Floating-point vectors.
//!
//! Plane vectors can be rotated and projected onto each other.  Space
//! vectors only expose their direction angles: rotating or projecting them
//! is not part of this crate.

use crate::points::{Point2D, Point3D};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Build a vector from its angle (in radians, counter-clockwise from the
    /// x axis) and its magnitude.
    #[must_use]
    pub fn from_polar(angle: f64, magnitude: f64) -> Self {
        Vector2D {
            x: magnitude * angle.cos(),
            y: magnitude * angle.sin(),
        }
    }

    /// The vector from the origin to the point
    #[must_use]
    pub fn from_point(point: Point2D) -> Self {
        Vector2D::new(point.x, point.y)
    }

    /// The vector going from `source` to `dest`
    #[must_use]
    pub fn between(source: Point2D, dest: Point2D) -> Self {
        Vector2D::new(dest.x - source.x, dest.y - source.y)
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle in radians, in `(-PI, PI]`
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotate counter-clockwise by `theta` radians.  The magnitude is kept.
    #[must_use]
    pub fn rotate(&self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Vector2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    /// A vector with the same direction and a magnitude of one.
    /// Returns None for the zero vector, which has no direction.
    #[must_use]
    pub fn normalize(&self) -> Option<Self> {
        let m = self.magnitude();
        if m == 0.0 || !m.is_finite() {
            None
        } else {
            Some(self.scale(1.0 / m))
        }
    }

    #[must_use]
    pub fn opposite(&self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }

    #[must_use]
    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product
    #[must_use]
    pub fn cross(&self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The component of self along `other`.
    /// Returns None when `other` is the zero vector.
    #[must_use]
    pub fn project(&self, other: &Vector2D) -> Option<Self> {
        let norm = other.dot(other);
        if norm == 0.0 || !norm.is_finite() {
            None
        } else {
            Some(other.scale(self.dot(other) / norm))
        }
    }

    /// Whether both vectors lie on the same line, within `tolerance`
    #[must_use]
    pub fn is_colinear(&self, other: &Vector2D, tolerance: f64) -> bool {
        self.cross(other).abs() <= tolerance
    }

    /// Whether both vectors are perpendicular, within `tolerance`
    #[must_use]
    pub fn is_orthogonal(&self, other: &Vector2D, tolerance: f64) -> bool {
        self.dot(other).abs() <= tolerance
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const ZERO: Vector3D = Vector3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    #[must_use]
    pub fn from_point(point: Point3D) -> Self {
        Vector3D::new(point.x, point.y, point.z)
    }

    #[must_use]
    pub fn between(source: Point3D, dest: Point3D) -> Self {
        Vector3D::new(dest.x - source.x, dest.y - source.y, dest.z - source.z)
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Angle in radians between the vector and the x axis, in `[0, PI]`.
    /// The zero vector has an angle of zero.
    #[must_use]
    pub fn angle_x(&self) -> f64 {
        self.y.hypot(self.z).atan2(self.x)
    }

    #[must_use]
    pub fn angle_y(&self) -> f64 {
        self.x.hypot(self.z).atan2(self.y)
    }

    #[must_use]
    pub fn angle_z(&self) -> f64 {
        self.x.hypot(self.y).atan2(self.z)
    }

    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Vector3D::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Returns None for the zero vector
    #[must_use]
    pub fn normalize(&self) -> Option<Self> {
        let m = self.magnitude();
        if m == 0.0 || !m.is_finite() {
            None
        } else {
            Some(self.scale(1.0 / m))
        }
    }

    #[must_use]
    pub fn opposite(&self) -> Self {
        Vector3D::new(-self.x, -self.y, -self.z)
    }

    #[must_use]
    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn is_colinear(&self, other: &Vector3D, tolerance: f64) -> bool {
        self.cross(other).magnitude() <= tolerance
    }

    #[must_use]
    pub fn is_orthogonal(&self, other: &Vector3D, tolerance: f64) -> bool {
        self.dot(other).abs() <= tolerance
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl core::ops::Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl core::ops::Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl core::ops::Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl ::core::fmt::Display for Vector2D {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl ::core::fmt::Display for Vector3D {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-9;

    fn assert_close(left: f64, right: f64) {
        assert!((left - right).abs() < EPS, "{left} != {right}");
    }

    #[test]
    fn test_vector2d() {
        let v = Vector2D::new(3.0, 4.0);
        assert_close(v.magnitude(), 5.0);
        assert_eq!(v + Vector2D::new(1.0, 1.0), Vector2D::new(4.0, 5.0));
        assert_eq!(v - v, Vector2D::ZERO);
        assert_eq!(-v, Vector2D::new(-3.0, -4.0));
        assert_eq!(v.scale(2.0), Vector2D::new(6.0, 8.0));

        let n = v.normalize().unwrap();
        assert_close(n.magnitude(), 1.0);
        assert!(Vector2D::ZERO.normalize().is_none());

        let p = Vector2D::from_polar(FRAC_PI_2, 2.0);
        assert_close(p.x, 0.0);
        assert_close(p.y, 2.0);
        assert_close(p.angle(), FRAC_PI_2);
        assert_close(Vector2D::new(-1.0, 0.0).angle(), PI);

        assert_eq!(
            Vector2D::between(Point2D::new(1.0, 1.0), Point2D::new(4.0, 5.0)),
            v
        );
        assert_eq!(Vector2D::from_point(Point2D::new(3.0, 4.0)), v);
        assert_eq!(v.to_string(), "<3, 4>");
    }

    #[test]
    fn test_products_2d() {
        let x = Vector2D::new(1.0, 0.0);
        let y = Vector2D::new(0.0, 1.0);
        assert_close(x.dot(&y), 0.0);
        assert_close(x.cross(&y), 1.0);
        assert_close(y.cross(&x), -1.0);
        assert!(x.is_orthogonal(&y, EPS));
        assert!(!x.is_colinear(&y, EPS));
        assert!(x.is_colinear(&x.scale(-3.0), EPS));
        assert!(!x.is_orthogonal(&Vector2D::new(1.0, 1.0), EPS));
    }

    #[test]
    fn test_rotate() {
        let v = Vector2D::new(2.0, 0.0);
        let r = v.rotate(FRAC_PI_2);
        assert_close(r.x, 0.0);
        assert_close(r.y, 2.0);

        let r = Vector2D::new(3.0, 4.0).rotate(-PI);
        assert_close(r.x, -3.0);
        assert_close(r.y, -4.0);

        let r = Vector2D::new(1.0, 1.0).rotate(1.234);
        assert_close(r.magnitude(), 2.0_f64.sqrt());
        assert_close(r.angle(), FRAC_PI_4 + 1.234);
    }

    #[test]
    fn test_project() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(
            v.project(&Vector2D::new(2.0, 0.0)),
            Some(Vector2D::new(3.0, 0.0))
        );
        let p = v.project(&Vector2D::new(0.0, -5.0)).unwrap();
        assert_close(p.x, 0.0);
        assert_close(p.y, 4.0);
        let p = v.project(&Vector2D::new(1.0, 1.0)).unwrap();
        assert_close(p.x, 3.5);
        assert_close(p.y, 3.5);

        // Orthogonal vectors project onto zero
        assert_eq!(
            Vector2D::new(0.0, 1.0).project(&Vector2D::new(5.0, 0.0)),
            Some(Vector2D::ZERO)
        );
        assert_eq!(v.project(&Vector2D::ZERO), None);
    }

    #[test]
    fn test_angles_3d() {
        let x = Vector3D::new(2.0, 0.0, 0.0);
        assert_close(x.angle_x(), 0.0);
        assert_close(x.angle_y(), FRAC_PI_2);
        assert_close(x.angle_z(), FRAC_PI_2);

        let down = Vector3D::new(0.0, 0.0, -1.0);
        assert_close(down.angle_z(), PI);
        assert_close(down.angle_x(), FRAC_PI_2);

        let diag = Vector3D::new(1.0, 1.0, 0.0);
        assert_close(diag.angle_x(), FRAC_PI_4);
        assert_close(diag.angle_y(), FRAC_PI_4);
        assert_close(diag.angle_z(), FRAC_PI_2);

        assert_close(Vector3D::ZERO.angle_x(), 0.0);
    }

    #[test]
    fn test_vector3d() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);
        let z = Vector3D::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&x), -z);
        assert_close(x.dot(&y), 0.0);
        assert!(x.is_orthogonal(&z, EPS));
        assert!(x.is_colinear(&x.scale(2.5), EPS));

        let v = Vector3D::new(2.0, 3.0, 6.0);
        assert_close(v.magnitude(), 7.0);
        assert_close(v.normalize().unwrap().magnitude(), 1.0);
        assert!(Vector3D::ZERO.normalize().is_none());
        assert_eq!(v - v, Vector3D::ZERO);
        assert_eq!(x + y + z, Vector3D::new(1.0, 1.0, 1.0));
        assert_eq!(
            Vector3D::between(Point3D::ORIGIN, Point3D::new(2.0, 3.0, 6.0)),
            v
        );
    }
}
