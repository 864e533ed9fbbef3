// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! JSON representation
//!
//! A [`RangeSet`] is represented as an array of rows, one per canonical range. A range holding a
//! single value is a one-element row, any other range is a `[start, finish]` row.
//!
//! ```json
//! [[-9, -7], [1, 2], [4]]
//! ```
//!
//! When reading, rows may come in any order and may overlap; the result is canonicalized.
use crate::{ImportError, Interval, RangeSet};
use serde_json::Value;

/// Converts a [`RangeSet`] to a [`serde_json::Value`].
impl From<&RangeSet> for Value {
    fn from(set: &RangeSet) -> Self {
        set.iter()
            .map(|ival| {
                if ival.is_point() {
                    Value::from(vec![ival.start()])
                } else {
                    Value::from(vec![ival.start(), ival.finish()])
                }
            })
            .collect()
    }
}

impl From<RangeSet> for Value {
    fn from(set: RangeSet) -> Self {
        Value::from(&set)
    }
}

/// Reads a [`RangeSet`] from a [`serde_json::Value`].
impl TryFrom<&Value> for RangeSet {
    type Error = ImportError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let rows = value
            .as_array()
            .ok_or(ImportError::Malformed("expected an array of ranges"))?;
        let ranges = rows
            .iter()
            .map(|row| {
                let bounds = row
                    .as_array()
                    .ok_or(ImportError::Malformed("expected a range to be an array"))?
                    .iter()
                    .map(|bound| {
                        bound
                            .as_i64()
                            .ok_or(ImportError::Malformed("range bounds must be integers"))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Interval::from_bounds(&bounds)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RangeSet::from_ranges(ranges))
    }
}
