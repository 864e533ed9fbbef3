// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # int-range-sets: Canonical Sets of Integer Ranges
//!
//! This crate represents sets of integers as a sorted list of disjoint closed ranges, and
//! provides exact set algebra over them: union, intersection and symmetric difference, plus
//! membership, containment and equality queries.
//!
//! It is meant as a building block for anything that needs a compact representation of sparse
//! integer sets: character classes, ID sets, or a substitute for large bitmaps.
//!
//! ## Core Concepts
//!
//! - [`Interval`]: an immutable closed range `[start, finish]` of `i64` values with
//!   `start <= finish`. Constructing (or deriving) an interval that ends before it starts fails
//!   with [`InvalidRange`].
//! - [`RangeSet`]: an immutable set of integers. Internally it is a list of intervals kept in
//!   *canonical* form: sorted by start, pairwise disjoint, and with at least one missing integer
//!   between any two consecutive intervals. Because the canonical form is unique, two sets are
//!   equal exactly when their interval lists are equal.
//!
//! Sets are never modified in place. Every operation returns a new set, so sets can be shared
//! freely, including across threads.
//!
//! ## Getting Started
//!
//! ```rust
//! use int_range_sets::{Interval, RangeSet, range_set};
//!
//! // ranges may be given in any order, and may overlap or touch
//! let set = RangeSet::from_ranges([
//!     Interval::new(7, 10)?,
//!     Interval::new(2, 5)?,
//!     Interval::point(6),
//! ]);
//! assert_eq!(set.ranges(), [Interval::new(2, 10)?]);
//!
//! let evens = range_set![[2], [4], [6], [8], [10]];
//! let other = range_set![[1, 13]];
//!
//! assert_eq!(set.intersection(&evens), evens);
//! assert_eq!(set.union(&other), other);
//! assert_eq!(
//!     range_set![[2, 5], [7, 10]].symmetric_difference(&other),
//!     range_set![[1], [6], [11, 13]],
//! );
//!
//! // intervals that end before they start are rejected
//! assert!(Interval::new(2, 1).is_err());
//! # Ok::<(), int_range_sets::InvalidRange>(())
//! ```
//!
//! ## How it Works
//!
//! All binary operations share the same shape. The interval lists of both operands are merged
//! by a [`Picker`] into one stream sorted by start, and a reducer walks that stream once while
//! holding a single pending interval. Union is the same reducer that canonicalizes arbitrary
//! input, which is why [`RangeSet::from_ranges`] and [`RangeSet::with_ranges`] just sort their
//! input and merge it into an existing set. Every operation is linear in the combined number of
//! ranges of its operands.
//!
//! ## Logging
//!
//! Set operations emit [`tracing`] events at `trace` level, and canonicalizing input that had
//! overlapping or adjacent ranges emits a `debug` event. No subscriber is installed by this
//! crate.
//!
//! ## Features
//!
//! - `json`: Enables conversion of range sets to and from `serde_json::Value`, in the compact
//!   form `[[1, 2], [4]]`. This feature is enabled by default.
//! - `serde`: Provides `serde` support for [`Interval`] and [`RangeSet`]. Deserialized sets are
//!   always canonicalized.
//! - `arbitrary`: Implements `quickcheck::Arbitrary` for [`Interval`] and [`RangeSet`], useful
//!   for property-based testing.
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[cfg(any(test, feature = "arbitrary"))]
mod arbitrary;
pub mod interval;
pub use interval::{ImportError, Interval, InvalidRange};
pub mod range_set;
pub use range_set::{PickFailure, Picker, RangeSet};
#[cfg(feature = "json")]
mod json;
/// Macros usable for tests and initialization
pub mod macros;
