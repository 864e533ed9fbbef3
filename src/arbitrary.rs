// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Implementation of the quickcheck::Arbitrary trait for intervals and range sets.

use crate::{Interval, RangeSet};
use quickcheck::{Arbitrary, Gen};

impl Arbitrary for Interval {
    fn arbitrary(g: &mut Gen) -> Self {
        // Skew the distribution to increase the likelihood of triggering bugs.
        // Uniformly random i64s almost never overlap or touch, and those are the interesting
        // cases for every reducer.
        let start_choices = [
            0,
            1,
            2,
            3,
            5,
            8,
            i64::from(i8::arbitrary(g)),
            i64::from(i8::arbitrary(g)),
            i64::arbitrary(g),
        ];
        let len_choices = [0, 0, 0, 1, 1, 2, 3, u64::from(u8::arbitrary(g))];
        let start = *g.choose(&start_choices).unwrap();
        let len = *g.choose(&len_choices).unwrap();
        Self::span(start, start.saturating_add_unsigned(len))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let len = self.finish().abs_diff(self.start());
        Box::new(
            (self.start(), len)
                .shrink()
                .map(|(start, len)| Self::span(start, start.saturating_add_unsigned(len))),
        )
    }
}

impl Arbitrary for RangeSet {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::from_ranges(Vec::<Interval>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.ranges().to_vec().shrink().map(Self::from_ranges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[quickcheck]
    fn qc_arbitrary_sets_are_canonical(set: RangeSet) -> bool {
        RangeSet::is_canonical(set.ranges())
    }

    #[test]
    fn shrunk_intervals_stay_valid() {
        let ival = Interval::new(-100, 100).unwrap();
        for shrunk in ival.shrink().take(64) {
            assert!(shrunk.start() <= shrunk.finish(), "{shrunk:?}");
        }
    }
}
