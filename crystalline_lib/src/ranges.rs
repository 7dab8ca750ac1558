use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::iter::FusedIterator;
use std::str::FromStr;

/// A discrete range of integers `[start, end)`.
///
/// The start is part of the range, the end is not.  A range always contains
/// at least one value, so `Range::new(5, 5)` is rejected.
///
/// ```
/// use crystalline_lib::ranges::Range;
/// let r = Range::new(3, 8).unwrap();
/// assert_eq!(r.count(), 5);
/// assert!(r.contains(3));
/// assert!(!r.contains(8));
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct Range {
    start: i32,
    end: i32,
}

// Unvalidated form used for (de)serialization
#[derive(Serialize, Deserialize)]
struct RawRange {
    start: i32,
    end: i32,
}

/// How a range relates to another one.  Reads as "A is `Relation` to B".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Same bounds
    Equal,

    /// A is a strict subset of B
    Enclosed,

    /// B is a strict subset of A
    Surrounding,

    /// Some values in common, and neither is a subset of the other
    Intersecting,

    /// No value in common, but one ends exactly where the other starts
    Touching,

    /// No value in common, with a gap between them
    Disjoint,
}

impl Range {
    /// Creates a new range of values.
    /// `start` is inclusive, `end` is exclusive.
    pub fn new(start: i32, end: i32) -> Result<Self, Error> {
        if end <= start {
            log::debug!("Rejected range [{}, {})", start, end);
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Range { start, end })
    }

    /// First, inclusive value in the range.
    #[must_use]
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Last, exclusive value in the range.
    #[must_use]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of integers in the range.  Never zero.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.end.abs_diff(self.start)
    }

    /// Whether the value is within the range.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.start <= value && value < self.end
    }

    /// Whether self completely encompasses the other range (a range
    /// contains itself).
    #[must_use]
    pub fn contains_range(&self, other: &Range) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Whether the two ranges have at least one value in common.
    /// Ranges that only touch (`[0, 10)` and `[10, 20)`) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True if no value lies between the two ranges, i.e. they either
    /// overlap or touch.
    #[must_use]
    pub fn contiguous(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The values common to both ranges, or None if they do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        if self.overlaps(other) {
            Some(Range {
                start: self.start.max(other.start),
                end: self.end.min(other.end),
            })
        } else {
            None
        }
    }

    /// The smallest range that contains both ranges.
    #[must_use]
    pub fn convex_hull(&self, other: &Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The union of the two ranges, if it can be represented as a single
    /// range.
    #[must_use]
    pub fn union(&self, other: &Range) -> Option<Range> {
        if self.contiguous(other) {
            Some(self.convex_hull(other))
        } else {
            None
        }
    }

    /// How self is positioned relative to `other`, as one of [`Relation`].
    #[must_use]
    pub fn relation(&self, other: &Range) -> Relation {
        if self == other {
            Relation::Equal
        } else if other.contains_range(self) {
            Relation::Enclosed
        } else if self.contains_range(other) {
            Relation::Surrounding
        } else if self.overlaps(other) {
            Relation::Intersecting
        } else if self.contiguous(other) {
            Relation::Touching
        } else {
            Relation::Disjoint
        }
    }

    /// Compare with a value of any type.  Only a range with the same
    /// bounds compares equal.
    #[must_use]
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Range>().is_some_and(|r| r == self)
    }

    /// Iterate over all integers in the range.
    #[must_use]
    pub fn iter(&self) -> RangeIter {
        RangeIter::new(self, 1)
    }

    /// Iterate over integers in the range, incrementing by `step` each time.
    /// The step must be greater than zero.
    pub fn iter_step(&self, step: i32) -> Result<RangeIter, Error> {
        if step < 1 {
            log::debug!("Rejected step {} for {}", step, self);
            return Err(Error::InvalidStep(step));
        }
        Ok(RangeIter::new(self, step))
    }
}

impl ::core::fmt::Display for Range {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl ::core::fmt::Display for Relation {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        let name = match self {
            Relation::Equal => "equal",
            Relation::Enclosed => "enclosed",
            Relation::Surrounding => "surrounding",
            Relation::Intersecting => "intersecting",
            Relation::Touching => "touching",
            Relation::Disjoint => "disjoint",
        };
        f.write_str(name)
    }
}

impl FromStr for Range {
    type Err = Error;

    /// Parses either `start..end` or `[start, end)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bracketed =
            s.strip_prefix('[').and_then(|inner| inner.strip_suffix(')'));
        let bounds = match bracketed {
            Some(inner) => inner.split_once(','),
            None => s.split_once(".."),
        };
        match bounds {
            Some((start, end)) => {
                Range::new(start.trim().parse()?, end.trim().parse()?)
            }
            None => Err(Error::Parse(format!(
                "Invalid range '{}', expected START..END",
                s
            ))),
        }
    }
}

impl TryFrom<RawRange> for Range {
    type Error = Error;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Range::new(raw.start, raw.end)
    }
}

impl From<Range> for RawRange {
    fn from(range: Range) -> Self {
        RawRange {
            start: range.start,
            end: range.end,
        }
    }
}

impl TryFrom<std::ops::Range<i32>> for Range {
    type Error = Error;

    fn try_from(range: std::ops::Range<i32>) -> Result<Self, Self::Error> {
        Range::new(range.start, range.end)
    }
}

impl From<Range> for std::ops::Range<i32> {
    fn from(range: Range) -> Self {
        range.start..range.end
    }
}

impl IntoIterator for Range {
    type Item = i32;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Range {
    type Item = i32;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A restartable cursor over the values of a range.
///
/// Each iterator owns its position, so several of them can walk the same
/// range independently.  Calling [`RangeIter::reset`] rewinds it so that
/// the next call to `next()` returns the start of the range again.
#[derive(Debug, Clone)]
pub struct RangeIter {
    lower: i32,
    upper: i32,
    step: i32,

    // Last value returned by next(), None before the first call
    current: Option<i32>,
}

impl RangeIter {
    fn new(range: &Range, step: i32) -> Self {
        RangeIter {
            lower: range.start,
            upper: range.end,
            step,
            current: None,
        }
    }

    #[must_use]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// The last value returned by the iterator, or None if it has not been
    /// advanced since it was created or reset.  Once the iterator is
    /// exhausted, this keeps returning the last value produced.
    #[must_use]
    pub fn current(&self) -> Option<i32> {
        self.current
    }

    /// Go back before the start of the range.
    pub fn reset(&mut self) {
        log::trace!("Reset iterator over [{}, {})", self.lower, self.upper);
        self.current = None;
    }

    fn following(&self) -> Option<i32> {
        match self.current {
            None => Some(self.lower),
            Some(c) => c.checked_add(self.step).filter(|v| *v < self.upper),
        }
    }
}

impl Iterator for RangeIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.following()?;
        self.current = Some(value);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.following() {
            None => 0,
            Some(first) => {
                let span = i64::from(self.upper) - i64::from(first) - 1;
                (span / i64::from(self.step) + 1) as usize
            }
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeIter {}
impl FusedIterator for RangeIter {}
