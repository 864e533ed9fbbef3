// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # RangeSet
//!
//! A [`RangeSet`] is an immutable set of integers stored as a sorted vector of
//! [`Interval`]s. The vector is always *canonical*:
//!
//! - intervals are sorted strictly ascending by start,
//! - no two intervals intersect,
//! - no interval [follows](Interval::follows) its predecessor, ie. there is at least one
//!   integer missing between any two consecutive intervals.
//!
//! A set is fully determined by its canonical vector, so equality is just vector equality.
//!
//! Every binary operation merges both operands with a [`Picker`] into a single stream sorted
//! by start, and then runs a reducer over that stream. Each one is a single linear pass.

use crate::interval::{ImportError, Interval};
use std::{
    fmt,
    ops::{BitAnd, BitOr, BitXor, Sub},
};
use tracing::{debug, trace};

mod picker;
mod reduce;

pub use picker::{PickFailure, Picker};

/// An immutable set of integers, stored as canonical ranges.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Interval>"))]
pub struct RangeSet(Vec<Interval>);

impl fmt::Debug for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl RangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps a list of ranges that is already canonical.
    ///
    /// No checks are made outside of debug builds! Use [`Self::from_ranges`] to create a set from
    /// an arbitrary list of ranges.
    #[must_use]
    pub fn from_canonical_unchecked(ranges: Vec<Interval>) -> Self {
        debug_assert!(Self::is_canonical(&ranges), "not canonical: {ranges:?}");
        Self(ranges)
    }

    /// Creates the set of all values covered by any of the given ranges.
    ///
    /// The ranges may come in any order, overlap or touch each other.
    pub fn from_ranges(ranges: impl IntoIterator<Item = Interval>) -> Self {
        Self::new().with_ranges(ranges)
    }

    /// Imports ranges from their compact row form, `[value]` or `[start, finish]`.
    ///
    /// ```rust
    /// # use int_range_sets::RangeSet;
    /// let ranges = RangeSet::import_ranges([vec![1_i64, 2], vec![4]]).unwrap();
    /// assert_eq!(format!("{:?}", RangeSet::from_ranges(ranges)), "{1..=2, 4}");
    /// ```
    pub fn import_ranges<R>(rows: impl IntoIterator<Item = R>) -> Result<Vec<Interval>, ImportError>
    where
        R: AsRef<[i64]>,
    {
        rows.into_iter()
            .map(|row| Interval::from_bounds(row.as_ref()))
            .collect()
    }

    /// Returns whether `ranges` is sorted, disjoint and has gaps between consecutive ranges.
    #[must_use]
    pub fn is_canonical(ranges: &[Interval]) -> bool {
        ranges
            .windows(2)
            .all(|w| w[0].finish() < w[1].start() && !w[1].follows(&w[0]))
    }

    /// Returns a new set that also holds every value of the given ranges.
    ///
    /// The ranges may come in any order, overlap or touch each other.
    #[must_use]
    pub fn with_ranges(&self, ranges: impl IntoIterator<Item = Interval>) -> Self {
        let mut incoming: Vec<Interval> = ranges.into_iter().collect();
        incoming.sort_by_key(Interval::start);
        let merged = reduce::canonicalize(Picker::pair(&self.0, &incoming));
        let absorbed = self.0.len() + incoming.len() - merged.len();
        if absorbed > 0 {
            debug!(
                existing = self.0.len(),
                incoming = incoming.len(),
                absorbed,
                "merged overlapping or adjacent ranges"
            );
        }
        Self::from_canonical_unchecked(merged)
    }

    /// Returns the set of values in `self` or `other` (A ∪ B).
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let ranges = reduce::canonicalize(Picker::pair(&self.0, &other.0));
        trace!(lhs = self.len(), rhs = other.len(), out = ranges.len(), "union");
        Self::from_canonical_unchecked(ranges)
    }

    /// Returns the set of values in both `self` and `other` (A ∩ B).
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let ranges = reduce::intersect(Picker::pair(&self.0, &other.0));
        trace!(lhs = self.len(), rhs = other.len(), out = ranges.len(), "intersection");
        Self::from_canonical_unchecked(ranges)
    }

    /// Returns the set of values in exactly one of `self` and `other` (A ∆ B).
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let ranges = reduce::symmetric_difference(Picker::pair(&self.0, &other.0));
        trace!(
            lhs = self.len(),
            rhs = other.len(),
            out = ranges.len(),
            "symmetric difference"
        );
        Self::from_canonical_unchecked(ranges)
    }

    /// Returns the set of values in `self` but not in `other` (A \ B).
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        // A \ B = A ∩ (A ∆ B)
        self.intersection(&self.symmetric_difference(other))
    }

    /// The canonical ranges of this set.
    #[must_use]
    pub fn ranges(&self) -> &[Interval] {
        &self.0
    }

    #[must_use]
    pub fn into_ranges(self) -> Vec<Interval> {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of ranges (not values) in this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The total number of values in this set.
    #[must_use]
    pub fn total_len(&self) -> u128 {
        self.0.iter().map(Interval::len).sum()
    }

    #[must_use]
    pub fn first(&self) -> Option<Interval> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Interval> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.0.iter()
    }

    /// Iterator over all the values of this set, in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().flat_map(Interval::values)
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        let p = self.0.partition_point(|ival| ival.finish() < value);
        self.0.get(p).is_some_and(|ival| ival.contains_value(value))
    }

    /// Returns whether every value of `ival` is in this set.
    #[must_use]
    pub fn contains_interval(&self, ival: &Interval) -> bool {
        // canonical ranges never touch, so `ival` has to fit inside a single one
        let p = self.0.partition_point(|s| s.finish() < ival.start());
        self.0.get(p).is_some_and(|s| s.contains(ival))
    }

    /// Returns whether `self` is a subset (A ⊆ B) of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.iter().all(|ival| other.contains_interval(ival))
    }

    /// Returns whether `self` is a superset (A ⊇ B) of `other`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns whether `self` and `other` share at least one value.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        // intervals of one side never overlap each other, so if the next interval starts before
        // the furthest end seen so far, that end must belong to the other side.
        let mut reach: Option<i64> = None;
        for ival in Picker::pair(&self.0, &other.0) {
            if reach.is_some_and(|reach| ival.start() <= reach) {
                return true;
            }
            reach = Some(reach.map_or(ival.finish(), |reach| reach.max(ival.finish())));
        }
        false
    }
}

impl From<Interval> for RangeSet {
    fn from(value: Interval) -> Self {
        value.as_range_set()
    }
}

impl From<Vec<Interval>> for RangeSet {
    fn from(value: Vec<Interval>) -> Self {
        Self::from_ranges(value)
    }
}

impl FromIterator<Interval> for RangeSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        Self::from_ranges(iter)
    }
}

impl IntoIterator for RangeSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl BitOr<&RangeSet> for &RangeSet {
    type Output = RangeSet;

    fn bitor(self, rhs: &RangeSet) -> Self::Output {
        self.union(rhs)
    }
}

impl BitAnd<&RangeSet> for &RangeSet {
    type Output = RangeSet;

    fn bitand(self, rhs: &RangeSet) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitXor<&RangeSet> for &RangeSet {
    type Output = RangeSet;

    fn bitxor(self, rhs: &RangeSet) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl Sub<&RangeSet> for &RangeSet {
    type Output = RangeSet;

    fn sub(self, rhs: &RangeSet) -> Self::Output {
        self.difference(rhs)
    }
}
