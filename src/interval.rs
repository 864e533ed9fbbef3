// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Interval
//!
//! An [`Interval`] is a closed, non-empty span of `i64` values `[start, finish]`.
//! It is the atomic value that [`RangeSet`] is built from.
//!
//! Intervals are immutable. Deriving a new interval from an existing one (see
//! [`Interval::with_start`] and [`Interval::with_finish`]) re-validates the
//! `start <= finish` invariant and reports [`InvalidRange`] if it would break.

use crate::RangeSet;
use std::{fmt, ops::RangeInclusive};

/// A closed interval of integers, `start..=finish`.
///
/// A single value is represented with `start == finish`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i64, i64)", into = "(i64, i64)"))]
pub struct Interval {
    /// First value of the interval (inclusive)
    start: i64,
    /// Last value of the interval (inclusive)
    finish: i64,
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        if self.finish != self.start {
            write!(f, "..={}", self.finish)?;
        }
        Ok(())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.finish)
    }
}

/// Error returned when an interval would end before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub start: i64,
    pub finish: i64,
}

impl fmt::Display for InvalidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid range: [{}, {}]", self.start, self.finish)
    }
}

impl std::error::Error for InvalidRange {}

/// Error returned when importing intervals from their compact row form.
///
/// See [`Interval::from_bounds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The bounds were well-formed but describe an empty interval.
    Range(InvalidRange),

    /// A row held neither one nor two bounds.
    BoundCount(usize),

    /// The input did not have the expected shape.
    Malformed(&'static str),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Range(err) => write!(f, "{err}"),
            ImportError::BoundCount(n) => {
                write!(f, "expected 1 or 2 bounds per range, got {n}")
            }
            ImportError::Malformed(what) => write!(f, "malformed range data: {what}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Range(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidRange> for ImportError {
    fn from(value: InvalidRange) -> Self {
        Self::Range(value)
    }
}

impl From<i64> for Interval {
    fn from(value: i64) -> Self {
        Self::point(value)
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = InvalidRange;

    fn try_from((start, finish): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(start, finish)
    }
}

impl TryFrom<(i64, Option<i64>)> for Interval {
    type Error = InvalidRange;

    fn try_from((start, finish): (i64, Option<i64>)) -> Result<Self, Self::Error> {
        Self::new(start, finish.unwrap_or(start))
    }
}

impl TryFrom<RangeInclusive<i64>> for Interval {
    type Error = InvalidRange;

    fn try_from(value: RangeInclusive<i64>) -> Result<Self, Self::Error> {
        Self::new(*value.start(), *value.end())
    }
}

impl From<Interval> for (i64, i64) {
    fn from(value: Interval) -> Self {
        (value.start, value.finish)
    }
}

impl From<Interval> for RangeInclusive<i64> {
    fn from(value: Interval) -> Self {
        value.start..=value.finish
    }
}

impl Interval {
    /// Creates a new [`Interval`] spanning `start..=finish`.
    ///
    /// Fails with [`InvalidRange`] if `finish < start`.
    pub fn new(start: i64, finish: i64) -> Result<Self, InvalidRange> {
        if finish < start {
            return Err(InvalidRange { start, finish });
        }
        Ok(Self { start, finish })
    }

    /// Creates a new [`Interval`] containing a single point.
    #[must_use]
    pub const fn point(value: i64) -> Self {
        Self {
            start: value,
            finish: value,
        }
    }

    /// Creates an interval whose bounds are already known to be ordered.
    ///
    /// Only the reducers use this, on bounds they derived from valid intervals.
    #[must_use]
    pub(crate) fn span(start: i64, finish: i64) -> Self {
        debug_assert!(start <= finish, "{start} <= {finish}");
        Self { start, finish }
    }

    /// Creates an interval from its compact row form: `[value]` or `[start, finish]`.
    pub fn from_bounds(bounds: &[i64]) -> Result<Self, ImportError> {
        match *bounds {
            [value] => Ok(Self::point(value)),
            [start, finish] => Ok(Self::new(start, finish)?),
            _ => Err(ImportError::BoundCount(bounds.len())),
        }
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub fn finish(&self) -> i64 {
        self.finish
    }

    /// The number of integer values this interval holds.
    ///
    /// This is a `u128` since `i64::MIN..=i64::MAX` holds 2^64 values.
    #[must_use]
    pub fn len(&self) -> u128 {
        u128::from(self.finish.abs_diff(self.start)) + 1
    }

    /// Intervals are never empty; this exists to pair with [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start == self.finish
    }

    #[must_use]
    pub fn contains_value(&self, value: i64) -> bool {
        self.start <= value && value <= self.finish
    }

    /// Returns whether `self` is a superset (A ⊇ B) of `other`.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.start >= self.start && other.finish <= self.finish
    }

    /// Returns whether the two intervals share at least one value.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.finish >= other.start && other.finish >= self.start
    }

    /// Returns whether `self` starts right after `other` ends, with no gap in between.
    #[must_use]
    pub fn follows(&self, other: &Self) -> bool {
        other.finish.checked_add(1) == Some(self.start)
    }

    /// Returns a copy of this interval starting at `start`.
    pub fn with_start(&self, start: i64) -> Result<Self, InvalidRange> {
        Self::new(start, self.finish)
    }

    /// Returns a copy of this interval finishing at `finish`.
    pub fn with_finish(&self, finish: i64) -> Result<Self, InvalidRange> {
        Self::new(self.start, finish)
    }

    /// The set holding exactly the values of this interval.
    #[must_use]
    pub fn as_range_set(&self) -> RangeSet {
        RangeSet::from_canonical_unchecked(vec![*self])
    }

    /// Iterator over all the values that this interval holds.
    pub fn values(&self) -> RangeInclusive<i64> {
        self.start..=self.finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct() {
        let ival = Interval::new(1, 3).unwrap();
        assert_eq!(ival.start(), 1);
        assert_eq!(ival.finish(), 3);
        assert!(!ival.is_point());

        let point = Interval::point(1);
        assert_eq!(point.start(), 1);
        assert_eq!(point.finish(), 1);
        assert!(point.is_point());
        assert_eq!(point, Interval::new(1, 1).unwrap());
        assert_eq!(point, Interval::try_from((1_i64, None)).unwrap());
        assert_eq!(point, Interval::from(1));

        assert_eq!(
            Interval::new(2, 1),
            Err(InvalidRange {
                start: 2,
                finish: 1
            })
        );
        assert_eq!(
            Interval::try_from(5_i64..=4),
            Err(InvalidRange {
                start: 5,
                finish: 4
            })
        );
        assert_eq!(Interval::try_from((1_i64, Some(3_i64))), Ok(ival));
        assert_eq!(Interval::try_from(1_i64..=3), Ok(ival));
    }

    #[test]
    fn invalid_range_message() {
        let err = Interval::new(2, 1).unwrap_err();
        assert_eq!(err.start, 2);
        assert_eq!(err.finish, 1);
        assert_eq!(err.to_string(), "invalid range: [2, 1]");
    }

    #[test]
    fn from_bounds() {
        assert_eq!(Interval::from_bounds(&[4]), Ok(Interval::point(4)));
        assert_eq!(Interval::from_bounds(&[1, 3]), Ok(Interval::new(1, 3).unwrap()));
        assert_eq!(
            Interval::from_bounds(&[3, 1]),
            Err(ImportError::Range(InvalidRange {
                start: 3,
                finish: 1
            }))
        );
        assert_eq!(Interval::from_bounds(&[]), Err(ImportError::BoundCount(0)));
        assert_eq!(
            Interval::from_bounds(&[1, 2, 3]),
            Err(ImportError::BoundCount(3))
        );
    }

    #[test]
    fn len() {
        for (start, finish, len) in [(1, 1, 1), (1, 2, 2), (-1, 1, 3), (-5, -2, 4)] {
            assert_eq!(Interval::new(start, finish).unwrap().len(), len);
        }
        assert_eq!(
            Interval::new(i64::MIN, i64::MAX).unwrap().len(),
            u128::from(u64::MAX) + 1
        );
    }

    #[test]
    fn contains_value() {
        let ival = Interval::new(2, 4).unwrap();
        assert!(!ival.contains_value(1));
        assert!(ival.contains_value(2));
        assert!(ival.contains_value(3));
        assert!(ival.contains_value(4));
        assert!(!ival.contains_value(5));
    }

    #[test]
    fn contains() {
        let outer = Interval::new(2, 5).unwrap();
        for (start, finish, expected) in [
            (2, 5, true),
            (3, 4, true),
            (2, 2, true),
            (5, 5, true),
            (1, 3, false),
            (4, 6, false),
            (1, 6, false),
            (7, 8, false),
        ] {
            let inner = Interval::new(start, finish).unwrap();
            assert_eq!(outer.contains(&inner), expected, "{outer} ⊇ {inner}");
        }
    }

    #[test]
    fn intersects() {
        let ival = Interval::new(2, 5).unwrap();
        for (start, finish, expected) in [
            (1, 1, false),
            (1, 2, true),
            (3, 4, true),
            (5, 6, true),
            (6, 7, false),
            (1, 7, true),
        ] {
            let other = Interval::new(start, finish).unwrap();
            assert_eq!(ival.intersects(&other), expected, "{ival} ∩ {other}");
            assert_eq!(other.intersects(&ival), expected, "{other} ∩ {ival}");
        }
    }

    #[test]
    fn follows() {
        let ival = Interval::new(2, 3).unwrap();
        assert!(Interval::new(4, 5).unwrap().follows(&ival));
        assert!(!Interval::new(5, 6).unwrap().follows(&ival));
        assert!(!Interval::new(3, 6).unwrap().follows(&ival));
        assert!(!ival.follows(&Interval::new(4, 5).unwrap()));
        assert!(ival.follows(&Interval::point(1)));

        // nothing can follow the end of the domain
        let last = Interval::point(i64::MAX);
        assert!(!Interval::point(i64::MIN).follows(&last));
    }

    #[test]
    fn derive() {
        let ival = Interval::new(1, 3).unwrap();
        assert_eq!(ival.with_start(2), Interval::new(2, 3));
        assert_eq!(ival.with_finish(2), Interval::new(1, 2));
        assert_eq!(
            ival.with_start(4),
            Err(InvalidRange {
                start: 4,
                finish: 3
            })
        );
        assert_eq!(
            ival.with_finish(0),
            Err(InvalidRange {
                start: 1,
                finish: 0
            })
        );
        // the original is untouched
        assert_eq!(ival, Interval::new(1, 3).unwrap());
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{:?}", Interval::point(7)), "7");
        assert_eq!(format!("{:?}", Interval::new(-1, 7).unwrap()), "-1..=7");
        assert_eq!(Interval::new(-1, 7).unwrap().to_string(), "[-1, 7]");
    }

    #[test]
    fn singleton_set() {
        let ival = Interval::new(1, 3).unwrap();
        assert_eq!(ival.as_range_set().ranges(), [ival]);
    }

    #[test]
    fn values() {
        let ival = Interval::new(-1, 2).unwrap();
        assert_eq!(ival.values().collect::<Vec<_>>(), [-1, 0, 1, 2]);
    }

    #[quickcheck]
    fn qc_intersects_iff_shared_value(a: (i8, u8), b: (i8, u8)) -> bool {
        let a = Interval::new(a.0.into(), i64::from(a.0) + i64::from(a.1 % 16)).unwrap();
        let b = Interval::new(b.0.into(), i64::from(b.0) + i64::from(b.1 % 16)).unwrap();
        let shared = a.values().any(|v| b.contains_value(v));
        a.intersects(&b) == shared
    }
}
