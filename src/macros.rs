// (c) Copyright 2025 Helsing GmbH. All rights reserved.
/// Convenience macro for creating a [`RangeSet`](crate::RangeSet) from literal rows.
///
/// Each row is either `[value]` or `[start, finish]`. Rows may be given in any order and may
/// overlap; the result is canonicalized.
///
/// NOTE! This panics if a row is not a valid range, so it is mostly useful for tests and
/// initialization with known-good values.
///
/// ```rust
/// # use int_range_sets::range_set;
/// let set = range_set![[4, 5], [1, 2], [3]];
/// assert_eq!(format!("{set:?}"), "{1..=5}");
/// ```
#[macro_export]
macro_rules! range_set {
    () => {
        $crate::RangeSet::new()
    };
    ($([$($bound:expr),+ $(,)?]),+ $(,)?) => {
        $crate::RangeSet::from_ranges([
            $(
                $crate::Interval::from_bounds(&[$($bound),+])
                    .expect("range_set! rows must be valid ranges"),
            )+
        ])
    };
}
