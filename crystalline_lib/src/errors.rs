use crate::intersections::Operation;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("End of range must be after start (got [{start}, {end}))")]
    InvalidRange { start: i32, end: i32 },

    #[error("Step must be greater than zero (got {0})")]
    InvalidStep(i32),

    #[error("Radius must be positive and finite (got {0})")]
    InvalidRadius(f64),

    #[error("Extent must be positive and finite (got {0})")]
    InvalidExtent(f64),

    #[error("{left} does not support {operation} with {right}")]
    Unsupported {
        operation: Operation,
        left: &'static str,
        right: &'static str,
    },

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    ParseInt(#[from] std::num::ParseIntError),
}
