// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context windows: clustering nearby highlights into excerpt fragments.
//!
//! Each mark wants `radius` characters of context on both sides. When two
//! marks are close enough that their context would touch or overlap, they
//! share one window instead of printing the text between them twice.
//!
//! ```text
//!   marks:        [===]          [==]                      [====]
//!   candidates: (-----------)(----------)            (--------------)
//!   windows:    (-----------------------)    …       (--------------)
//! ```

use crate::contracts::check_windows_well_formed;
use crate::excerpt::boundary::{Direction, WordSnapper};
use crate::types::{ContextWindow, Interval};
use tracing::{debug, warn};

/// Cluster merged marks into context windows.
///
/// `marks` must be sorted and disjoint (the output of `merge_intervals`).
/// When `max_marks` is set, only the first `max_marks` marks are considered.
///
/// Marks reaching past `doc_len` are clamped; marks lying entirely past it are
/// dropped. Each candidate span `[start - radius, end + radius]` is clamped to
/// `[0, doc_len]` and joins the open window when it starts at or before the
/// open window's end.
pub fn build_windows(
    doc_len: usize,
    marks: &[Interval],
    radius: usize,
    max_marks: Option<usize>,
) -> Vec<ContextWindow> {
    let considered = max_marks.map_or(marks.len(), |cap| cap.min(marks.len()));
    let mut windows: Vec<ContextWindow> = Vec::new();
    let mut dropped = 0usize;

    for raw in &marks[..considered] {
        let mark = raw.clamp_to(doc_len);
        if mark.is_empty() {
            dropped += 1;
            continue;
        }
        let candidate = Interval::new(
            mark.start.saturating_sub(radius),
            mark.end.saturating_add(radius).min(doc_len),
        );

        match windows.last_mut() {
            Some(open) if candidate.start <= open.span.end => {
                open.span.end = open.span.end.max(candidate.end);
                open.marks.push(mark);
            }
            _ => windows.push(ContextWindow {
                span: candidate,
                marks: vec![mark],
            }),
        }
    }

    if dropped > 0 {
        warn!(dropped, doc_len, "dropped match positions past the end of the text");
    }
    debug!(
        marks = considered - dropped,
        skipped = marks.len() - considered,
        windows = windows.len(),
        "built context windows"
    );

    check_windows_well_formed(&windows, doc_len);
    windows
}

/// Pull each window's edges in to word boundaries.
///
/// The start snaps forward, no further than the first mark's start; the end
/// snaps backward, no further than the last mark's end. Windows only shrink,
/// so ordering and mark containment are preserved.
pub fn snap_windows(windows: &mut [ContextWindow], text: &[char], snapper: &WordSnapper) {
    for window in windows.iter_mut() {
        let (Some(first), Some(last)) = (window.marks.first(), window.marks.last()) else {
            continue;
        };
        let start = snapper.snap(text, window.span.start, first.start, Direction::Forward);
        let end = snapper.snap(text, window.span.end, last.end, Direction::Backward);
        window.span = Interval::new(start, end);
    }
    check_windows_well_formed(windows, text.len());
}
