// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Single-pass reducers over a start-ordered stream of intervals.
//!
//! Each reducer holds at most one pending "buffer" interval that it extends, splits or flushes
//! as the next interval comes in. The input is expected to come out of a
//! [`Picker`](super::Picker), so starts never decrease.

use crate::Interval;
use std::cmp::Ordering;

/// Folds a start-ordered stream of possibly overlapping or touching intervals into canonical
/// form.
///
/// Feeding it the merge of two canonical lists yields their union.
pub(super) fn canonicalize(picked: impl Iterator<Item = Interval>) -> Vec<Interval> {
    let mut out = Vec::with_capacity(picked.size_hint().0);
    let mut buffer: Option<Interval> = None;
    for ival in picked {
        buffer = Some(match buffer {
            None => ival,
            // `ival` starts no earlier than the buffer, so this means it's entirely covered
            Some(buf) if buf.contains_value(ival.finish()) => buf,
            // here `ival` must end after the buffer, so it extends it
            Some(buf) if buf.contains_value(ival.start()) || ival.follows(&buf) => {
                Interval::span(buf.start(), ival.finish())
            }
            Some(buf) => {
                out.push(buf);
                ival
            }
        });
    }
    out.extend(buffer);
    out
}

/// Computes the overlap between two merged canonical lists.
pub(super) fn intersect(picked: impl Iterator<Item = Interval>) -> Vec<Interval> {
    let mut out = Vec::new();
    let mut buffer: Option<Interval> = None;
    for ival in picked {
        let Some(buf) = buffer.filter(|buf| buf.intersects(&ival)) else {
            // whatever was buffered has no counterpart left on the other side
            buffer = Some(ival);
            continue;
        };
        let clipped = Interval::span(buf.start().max(ival.start()), buf.finish());
        if clipped.finish() > ival.finish() {
            out.push(Interval::span(clipped.start(), ival.finish()));
            // the tail may still overlap with the next interval from the other side
            buffer = Some(Interval::span(ival.finish() + 1, clipped.finish()));
        } else {
            out.push(clipped);
            // the part of `ival` past the overlap may still meet the buffer's side again. the
            // next overlap re-clips its start, so keeping all of `ival` is enough.
            buffer = Some(ival);
        }
    }
    // no final flush: a pending buffer had nothing left to overlap with
    out
}

/// Computes the values held by exactly one of two merged canonical lists.
pub(super) fn symmetric_difference(picked: impl Iterator<Item = Interval>) -> Vec<Interval> {
    let mut out = Vec::with_capacity(picked.size_hint().0);
    let mut buffer: Option<Interval> = None;
    for ival in picked {
        let Some(mut buf) = buffer else {
            buffer = Some(ival);
            continue;
        };
        if buf.intersects(&ival) {
            if buf.start() < ival.start() {
                // the head of the buffer is exclusive to its side
                out.push(Interval::span(buf.start(), ival.start() - 1));
                buf = Interval::span(ival.start(), buf.finish());
            }
            buffer = match buf.finish().cmp(&ival.finish()) {
                Ordering::Less => Some(Interval::span(buf.finish() + 1, ival.finish())),
                Ordering::Greater => Some(Interval::span(ival.finish() + 1, buf.finish())),
                Ordering::Equal => None,
            };
        } else if ival.follows(&buf) {
            // both are exclusive and touch, so they form one range
            buffer = Some(Interval::span(buf.start(), ival.finish()));
        } else {
            out.push(buf);
            buffer = Some(ival);
        }
    }
    out.extend(buffer);
    out
}
