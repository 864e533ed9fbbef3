// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! K-way merge over start-sorted interval lists.

use crate::Interval;
use smallvec::SmallVec;
use std::{fmt, iter::FusedIterator};

/// Error raised when the [`Picker`] selects a list whose cursor does not point at an interval.
///
/// This indicates broken cursor bookkeeping inside the picker and is never expected to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickFailure {
    pub list: usize,
    pub cursor: usize,
}

impl fmt::Display for PickFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to pick range from list {} at cursor {}",
            self.list, self.cursor
        )
    }
}

impl std::error::Error for PickFailure {}

/// Merges several interval lists, each sorted by start, into one stream sorted by start.
///
/// Every interval of every list is yielded exactly once. When heads of several lists share the
/// same start, the list that was registered first wins. The lists do not need to be canonical:
/// intervals within one list may overlap or touch.
///
/// Sets only ever merge two lists at a time, so two cursors are kept inline.
#[derive(Debug, Clone)]
pub struct Picker<'a> {
    lists: SmallVec<[&'a [Interval]; 2]>,
    cursors: SmallVec<[usize; 2]>,
}

impl<'a> Picker<'a> {
    pub fn new(lists: impl IntoIterator<Item = &'a [Interval]>) -> Self {
        let lists: SmallVec<[&'a [Interval]; 2]> = lists.into_iter().collect();
        debug_assert!(
            lists
                .iter()
                .all(|list| list.windows(2).all(|w| w[0].start() <= w[1].start())),
            "picker lists must be sorted by start"
        );
        let cursors = SmallVec::from_elem(0, lists.len());
        Self { lists, cursors }
    }

    pub(crate) fn pair(first: &'a [Interval], second: &'a [Interval]) -> Self {
        Self::new([first, second])
    }

    /// Picks the interval with the lowest start among the heads of all lists.
    ///
    /// Returns `Ok(None)` once every list is exhausted.
    pub fn try_next(&mut self) -> Result<Option<Interval>, PickFailure> {
        let mut selected: Option<(usize, i64)> = None;
        for (list, (ranges, &cursor)) in self.lists.iter().zip(&self.cursors).enumerate() {
            let Some(head) = ranges.get(cursor) else {
                continue;
            };
            // strictly lower, so ties stay with the earlier list
            if selected.is_none_or(|(_, start)| head.start() < start) {
                selected = Some((list, head.start()));
            }
        }
        let Some((list, _)) = selected else {
            return Ok(None);
        };

        let cursor = self.cursors[list];
        let picked = self.lists[list]
            .get(cursor)
            .copied()
            .ok_or(PickFailure { list, cursor })?;
        self.cursors[list] += 1;
        Ok(Some(picked))
    }

    fn remaining(&self) -> usize {
        self.lists
            .iter()
            .zip(&self.cursors)
            .map(|(list, &cursor)| list.len().saturating_sub(cursor))
            .sum()
    }
}

impl Iterator for Picker<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(next) => next,
            Err(err) => unreachable!("{err}"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Picker<'_> {}

impl FusedIterator for Picker<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivals(bounds: &[(i64, i64)]) -> Vec<Interval> {
        bounds
            .iter()
            .map(|&(start, finish)| Interval::new(start, finish).unwrap())
            .collect()
    }

    #[test]
    fn empty() {
        let mut picker = Picker::new(std::iter::empty());
        assert_eq!(picker.len(), 0);
        assert_eq!(picker.try_next(), Ok(None));

        let mut picker = Picker::pair(&[], &[]);
        assert_eq!(picker.next(), None);
        assert_eq!(picker.next(), None);
    }

    #[test]
    fn one_side_empty() {
        let left = ivals(&[(1, 2), (4, 5)]);
        let picked: Vec<_> = Picker::pair(&left, &[]).collect();
        assert_eq!(picked, left);
        let picked: Vec<_> = Picker::pair(&[], &left).collect();
        assert_eq!(picked, left);
    }

    #[test]
    fn interleaves_by_start() {
        let left = ivals(&[(1, 2), (6, 8), (20, 20)]);
        let right = ivals(&[(3, 4), (5, 30)]);
        let picked: Vec<_> = Picker::pair(&left, &right).collect();
        assert_eq!(
            picked,
            ivals(&[(1, 2), (3, 4), (5, 30), (6, 8), (20, 20)])
        );
    }

    #[test]
    fn ties_go_to_first_list() {
        let left = ivals(&[(1, 5)]);
        let right = ivals(&[(1, 2)]);
        let picked: Vec<_> = Picker::pair(&left, &right).collect();
        assert_eq!(picked, ivals(&[(1, 5), (1, 2)]));

        let picked: Vec<_> = Picker::pair(&right, &left).collect();
        assert_eq!(picked, ivals(&[(1, 2), (1, 5)]));
    }

    #[test]
    fn overlapping_within_a_list() {
        // lists only need to be sorted, not canonical
        let left = ivals(&[(1, 3), (2, 4), (2, 2)]);
        let right = ivals(&[(2, 9)]);
        let picked: Vec<_> = Picker::pair(&left, &right).collect();
        assert_eq!(picked, ivals(&[(1, 3), (2, 4), (2, 2), (2, 9)]));
    }

    #[test]
    fn many_lists() {
        let a = ivals(&[(3, 3), (9, 9)]);
        let b = ivals(&[(1, 1), (9, 10)]);
        let c = ivals(&[(2, 2), (3, 4)]);
        let mut picker = Picker::new([a.as_slice(), b.as_slice(), c.as_slice()]);
        assert_eq!(picker.len(), 6);
        let first = picker.next();
        assert_eq!(first, Some(Interval::point(1)));
        assert_eq!(picker.len(), 5);
        let rest: Vec<_> = picker.collect();
        assert_eq!(
            rest,
            ivals(&[(2, 2), (3, 3), (3, 4), (9, 9), (9, 10)])
        );
    }

    #[quickcheck]
    fn qc_merge_is_sorted_and_complete(left: Vec<i8>, right: Vec<i8>) -> bool {
        let mut left: Vec<_> = left.into_iter().map(|v| Interval::point(v.into())).collect();
        let mut right: Vec<_> = right.into_iter().map(|v| Interval::point(v.into())).collect();
        left.sort_by_key(Interval::start);
        right.sort_by_key(Interval::start);

        let picked: Vec<_> = Picker::pair(&left, &right).collect();
        let mut expected = [left, right].concat();
        expected.sort_by_key(Interval::start);
        picked == expected
    }
}
