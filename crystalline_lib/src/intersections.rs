//! Containment and intersection tests between two primitives.
//!
//! Each supported pair of concrete types maps to a dedicated method on the
//! shapes themselves.  Pairs for which no algorithm is defined (in
//! particular everything involving floating-point shapes) return
//! [`Error::Unsupported`] rather than guessing.

use crate::errors::Error;
use crate::primitives::Primitive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Contains,
    Intersects,
}

impl ::core::fmt::Display for Operation {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            Operation::Contains => f.write_str("contains"),
            Operation::Intersects => f.write_str("intersects"),
        }
    }
}

fn unsupported(
    operation: Operation,
    left: &Primitive,
    right: &Primitive,
) -> Error {
    log::debug!(
        "No {} algorithm for {} and {}",
        operation,
        left.name(),
        right.name()
    );
    Error::Unsupported {
        operation,
        left: left.name(),
        right: right.name(),
    }
}

/// Whether `other` lies entirely within `container`.
pub fn contains(
    container: &Primitive,
    other: &Primitive,
) -> Result<bool, Error> {
    use Primitive as P;
    match (container, other) {
        (P::Rect2I(r), P::Point2I(p)) => Ok(r.contains_point(p)),
        (P::Rect2I(r), P::Line2I(l)) => Ok(r.contains_line(l)),
        (P::Rect2I(r), P::Rect2I(o)) => Ok(r.contains_rect(o)),
        (P::Rect3I(r), P::Point3I(p)) => Ok(r.contains_point(p)),
        (P::Rect3I(r), P::Line3I(l)) => Ok(r.contains_line(l)),
        (P::Rect3I(r), P::Rect3I(o)) => Ok(r.contains_rect(o)),
        _ => Err(unsupported(Operation::Contains, container, other)),
    }
}

/// Whether the two primitives have at least one point in common.  This is
/// symmetric: swapping the arguments gives the same answer.
pub fn intersects(
    left: &Primitive,
    right: &Primitive,
) -> Result<bool, Error> {
    use Primitive as P;
    match (left, right) {
        (P::Rect2I(a), P::Rect2I(b)) => Ok(a.intersects_rect(b)),
        (P::Rect3I(a), P::Rect3I(b)) => Ok(a.intersects_rect(b)),
        (P::Rect2I(r), P::Point2I(p)) | (P::Point2I(p), P::Rect2I(r)) => {
            Ok(r.contains_point(p))
        }
        (P::Rect3I(r), P::Point3I(p)) | (P::Point3I(p), P::Rect3I(r)) => {
            Ok(r.contains_point(p))
        }
        (P::Point2I(a), P::Point2I(b)) => Ok(a == b),
        (P::Point3I(a), P::Point3I(b)) => Ok(a == b),
        _ => Err(unsupported(Operation::Intersects, left, right)),
    }
}
