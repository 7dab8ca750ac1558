//! Geometry primitives over integer and floating-point coordinates.
//!
//! The base building block is [`ranges::Range`], a half-open interval of
//! integers `[start, end)`.  Integer rectangles and boxes are built as one
//! range per axis, and share the same semantics: the end of each axis is
//! excluded, so shapes that merely touch do not intersect.
//!
//! ```text
//!     [0 ------- 10)
//!                [10 ------- 20)      touching, no overlap
//!           [5 ------ 15)             overlaps both
//! ```
//!
//! Shapes can also be wrapped in a [`primitives::Primitive`], and tested
//! against each other with [`intersections::contains`] and
//! [`intersections::intersects`].

pub mod errors;
pub mod intersections;
pub mod lines;
pub mod points;
pub mod primitives;
pub mod ranges;
pub mod rects;
pub mod shapes;
pub mod vectors;

pub use crate::errors::Error;
pub use crate::ranges::Range;
