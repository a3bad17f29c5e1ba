// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the excerpt pipeline.
//!
//! Debug-mode assertions that check the invariants each stage promises the
//! next one. They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Loud in tests**: a violation is a composition bug, not bad input
//!
//! Bad input never trips these. The merger sorts and merges, the window
//! builder clamps. If a contract fires, a stage broke its promise.
//!
//! | Contract                        | Promised by              |
//! |---------------------------------|--------------------------|
//! | `check_intervals_normalized`    | `merge_intervals`        |
//! | `check_windows_well_formed`     | `build_windows`, snapping|
//! | `check_window_segments`         | `render_windows`         |

use crate::types::{ContextWindow, Interval, Segment};

// ============================================================================
// INTERVAL CONTRACTS
// ============================================================================

/// Check that intervals are non-empty, sorted, and strictly separated.
///
/// Strict: touching intervals (`a.end == b.start`) must have been merged.
#[inline]
pub fn check_intervals_normalized(intervals: &[Interval]) {
    for (i, interval) in intervals.iter().enumerate() {
        debug_assert!(
            !interval.is_empty(),
            "Contract violation: interval[{}] {:?} is empty",
            i,
            interval
        );
        if i > 0 {
            let prev = &intervals[i - 1];
            debug_assert!(
                prev.end < interval.start,
                "Contract violation: interval[{}] {:?} not strictly after interval[{}] {:?}",
                i,
                interval,
                i - 1,
                prev
            );
        }
    }
}

// ============================================================================
// WINDOW CONTRACTS
// ============================================================================

/// Check window bounds, mark containment and ordering.
///
/// - every span lies within `[0, doc_len]` and is non-empty
/// - every window has at least one mark, all inside its span
/// - marks within a window are sorted and disjoint
/// - consecutive windows do not overlap
#[inline]
pub fn check_windows_well_formed(windows: &[ContextWindow], doc_len: usize) {
    for (i, window) in windows.iter().enumerate() {
        debug_assert!(
            window.span.start < window.span.end && window.span.end <= doc_len,
            "Contract violation: window[{}] span {:?} outside [0, {}] or empty",
            i,
            window.span,
            doc_len
        );
        debug_assert!(
            !window.marks.is_empty(),
            "Contract violation: window[{}] has no marks",
            i
        );
        for mark in &window.marks {
            debug_assert!(
                window.span.contains(mark),
                "Contract violation: window[{}] span {:?} does not contain mark {:?}",
                i,
                window.span,
                mark
            );
        }
        for pair in window.marks.windows(2) {
            debug_assert!(
                pair[0].end <= pair[1].start,
                "Contract violation: window[{}] marks {:?} and {:?} overlap or are unsorted",
                i,
                pair[0],
                pair[1]
            );
        }
        if i > 0 {
            let prev = &windows[i - 1];
            debug_assert!(
                prev.span.end <= window.span.start,
                "Contract violation: window[{}] {:?} overlaps window[{}] {:?}",
                i - 1,
                prev.span,
                i,
                window.span
            );
        }
    }
}

// ============================================================================
// RENDER CONTRACTS
// ============================================================================

/// Check that one window's text segments reproduce its slice exactly.
#[inline]
pub fn check_window_segments(segments: &[Segment], expected: &str) {
    if cfg!(debug_assertions) {
        let rebuilt: String = segments.iter().filter_map(Segment::text).collect();
        debug_assert!(
            rebuilt == expected,
            "Contract violation: window segments rebuild {:?}, expected {:?}",
            rebuilt,
            expected
        );
    }
}
