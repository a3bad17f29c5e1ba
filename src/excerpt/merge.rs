// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interval merging.
//!
//! The index reports one `(offset, length)` pair per matched term occurrence,
//! per query fragment. Two fragments that hit the same word ("quick" and
//! "qui*") produce overlapping pairs, and nothing promises they arrive sorted.
//! Everything downstream wants one sorted, disjoint list per field.

use crate::contracts::check_intervals_normalized;
use crate::types::{FieldMatches, Interval, MatchMetadata};
use tracing::debug;

/// Merge intervals into a sorted, disjoint list covering the same offsets.
///
/// Sort by `start` (ties by `end`), then sweep with a running `(low, high)`:
/// an interval starting past `high` opens a new run, anything else extends it.
/// Touching intervals (`[0,3)` and `[3,5)`) merge. Empty intervals cover
/// nothing and are dropped.
///
/// The output does not depend on input order, and merging twice is the same
/// as merging once.
pub fn merge_intervals(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.into_iter().filter(|i| !i.is_empty()).collect();
    sorted.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(open) if interval.start <= open.end => {
                if interval.end > open.end {
                    open.end = interval.end;
                }
            }
            _ => merged.push(interval),
        }
    }

    check_intervals_normalized(&merged);
    merged
}

/// Gather every position of every query fragment, grouped by field and merged.
///
/// Fields with no positions at all are left out, so "field absent" and
/// "no highlight" mean the same thing downstream.
pub fn collect_field_matches(metadata: &MatchMetadata) -> FieldMatches {
    let mut raw: FieldMatches = FieldMatches::new();
    for fields in metadata.values() {
        for (field, positions) in fields {
            raw.entry(field.clone())
                .or_default()
                .extend(positions.position.iter().map(|p| p.to_interval()));
        }
    }

    let mut matches = FieldMatches::new();
    for (field, intervals) in raw {
        let before = intervals.len();
        let merged = merge_intervals(intervals);
        if merged.is_empty() {
            continue;
        }
        debug!(field = %field, raw = before, merged = merged.len(), "merged match positions");
        matches.insert(field, merged);
    }
    matches
}
