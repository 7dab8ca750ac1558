use crate::errors::Error;
use crate::intersections;
use crate::lines::{Line2D, Line2I, Line3D, Line3I};
use crate::points::{Point2D, Point2I, Point3D, Point3I};
use crate::rects::{Rect2D, Rect2I, Rect3D, Rect3I};
use crate::shapes::{Circle, Sphere, Tri2D, Tri3D};

/// The various families of primitives, regardless of their dimension or
/// coordinate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A single point in space
    Point,

    /// A connection between two points
    Line,

    /// Rectangular shape with only parallel and perpendicular sides
    Rect,

    /// Triangle formed from three connected points
    Tri,

    Circle,
    Sphere,
}

/// Any of the shapes that can be tested for containment or intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Point2I(Point2I),
    Point3I(Point3I),
    Point2D(Point2D),
    Point3D(Point3D),
    Line2I(Line2I),
    Line3I(Line3I),
    Line2D(Line2D),
    Line3D(Line3D),
    Rect2I(Rect2I),
    Rect3I(Rect3I),
    Rect2D(Rect2D),
    Rect3D(Rect3D),
    Tri2D(Tri2D),
    Tri3D(Tri3D),
    Circle(Circle),
    Sphere(Sphere),
}

impl Primitive {
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Point2I(_)
            | Primitive::Point3I(_)
            | Primitive::Point2D(_)
            | Primitive::Point3D(_) => PrimitiveKind::Point,
            Primitive::Line2I(_)
            | Primitive::Line3I(_)
            | Primitive::Line2D(_)
            | Primitive::Line3D(_) => PrimitiveKind::Line,
            Primitive::Rect2I(_)
            | Primitive::Rect3I(_)
            | Primitive::Rect2D(_)
            | Primitive::Rect3D(_) => PrimitiveKind::Rect,
            Primitive::Tri2D(_) | Primitive::Tri3D(_) => PrimitiveKind::Tri,
            Primitive::Circle(_) => PrimitiveKind::Circle,
            Primitive::Sphere(_) => PrimitiveKind::Sphere,
        }
    }

    /// Name of the concrete type, used in error messages
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Point2I(_) => "Point2I",
            Primitive::Point3I(_) => "Point3I",
            Primitive::Point2D(_) => "Point2D",
            Primitive::Point3D(_) => "Point3D",
            Primitive::Line2I(_) => "Line2I",
            Primitive::Line3I(_) => "Line3I",
            Primitive::Line2D(_) => "Line2D",
            Primitive::Line3D(_) => "Line3D",
            Primitive::Rect2I(_) => "Rect2I",
            Primitive::Rect3I(_) => "Rect3I",
            Primitive::Rect2D(_) => "Rect2D",
            Primitive::Rect3D(_) => "Rect3D",
            Primitive::Tri2D(_) => "Tri2D",
            Primitive::Tri3D(_) => "Tri3D",
            Primitive::Circle(_) => "Circle",
            Primitive::Sphere(_) => "Sphere",
        }
    }

    /// Whether `other` lies entirely within self.
    /// See [`intersections::contains`].
    pub fn contains(&self, other: &Primitive) -> Result<bool, Error> {
        intersections::contains(self, other)
    }

    /// See [`intersections::intersects`].
    pub fn intersects(&self, other: &Primitive) -> Result<bool, Error> {
        intersections::intersects(self, other)
    }
}

macro_rules! primitive_from {
    ($($typ:ident),*) => {
        $(
            impl From<$typ> for Primitive {
                fn from(value: $typ) -> Self {
                    Primitive::$typ(value)
                }
            }
        )*
    };
}

primitive_from!(
    Point2I, Point3I, Point2D, Point3D, Line2I, Line3I, Line2D, Line3D, Rect2I,
    Rect3I, Rect2D, Rect3D, Tri2D, Tri3D, Circle, Sphere
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kind() {
        let point: Primitive = Point3D::ORIGIN.into();
        assert_eq!(point.kind(), PrimitiveKind::Point);
        assert_eq!(point.name(), "Point3D");

        let rect: Primitive = Rect2I::new(0, 0, 1, 1).unwrap().into();
        assert_eq!(rect.kind(), PrimitiveKind::Rect);
        assert_eq!(rect.name(), "Rect2I");

        let line: Primitive = Line2I::default().into();
        assert_eq!(line.kind(), PrimitiveKind::Line);
        let line: Primitive = Line3D::default().into();
        assert_eq!(line.kind(), PrimitiveKind::Line);
        assert_eq!(line.name(), "Line3D");

        let sphere: Primitive =
            Sphere::new(Point3D::ORIGIN, 1.0).unwrap().into();
        assert_eq!(sphere.kind(), PrimitiveKind::Sphere);
        assert_eq!(sphere.name(), "Sphere");
    }
}
