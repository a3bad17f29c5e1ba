// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning windows into segments.
//!
//! Output is structured (`Segment`s), never markup. Page text may contain
//! `<`, `&`, or anything else; the UI layer creates text nodes from it.

use crate::contracts::check_window_segments;
use crate::document::Document;
use crate::excerpt::boundary::{Direction, WordSnapper};
use crate::types::{ContextWindow, Excerpt, Interval, Segment};

/// Render windows as an excerpt, or the fallback prefix when there are none.
pub fn render_excerpt(
    doc: &Document<'_>,
    windows: &[ContextWindow],
    fallback_length: usize,
    snapper: Option<&WordSnapper>,
) -> Excerpt {
    if windows.is_empty() {
        render_fallback(doc, fallback_length, snapper)
    } else {
        render_windows(doc, windows)
    }
}

/// Render each window's slice with its marks highlighted.
///
/// An `Ellipsis` goes between windows, before the first window unless it
/// starts the document, and after the last unless it ends the document. No
/// text segment spans two windows.
pub fn render_windows(doc: &Document<'_>, windows: &[ContextWindow]) -> Excerpt {
    let mut segments = Vec::with_capacity(windows.len() * 4 + 1);

    for (i, window) in windows.iter().enumerate() {
        if i > 0 || window.span.start > 0 {
            segments.push(Segment::Ellipsis);
        }
        let first = segments.len();
        push_marked(&mut segments, doc, window.span, &window.marks);
        check_window_segments(&segments[first..], doc.slice(window.span));
    }

    if windows.last().is_some_and(|w| w.span.end < doc.len()) {
        segments.push(Segment::Ellipsis);
    }
    Excerpt::new(segments)
}

/// The excerpt shown when a field has no highlight: the first `length`
/// characters, then an `Ellipsis` if the text goes on.
///
/// With a snapper the cut moves back to the end of the last whole word. If
/// the prefix holds no word boundary at all the raw cut is kept.
pub fn render_fallback(doc: &Document<'_>, length: usize, snapper: Option<&WordSnapper>) -> Excerpt {
    if doc.is_empty() {
        return Excerpt::default();
    }

    let raw = length.min(doc.len());
    let cut = match snapper {
        Some(snapper) if raw < doc.len() => {
            match snapper.snap(doc.chars(), raw, 0, Direction::Backward) {
                0 => raw,
                snapped => snapped,
            }
        }
        _ => raw,
    };

    let mut segments = Vec::with_capacity(2);
    if cut > 0 {
        segments.push(Segment::Plain(doc.slice(Interval::new(0, cut)).to_string()));
    }
    if cut < doc.len() {
        segments.push(Segment::Ellipsis);
    }
    Excerpt::new(segments)
}

/// Highlight marks across the whole text, without windows or ellipses.
///
/// Used for short fields (titles, author names) shown in full. Marks must be
/// merged; ones reaching past the end are clamped.
pub fn render_full(doc: &Document<'_>, marks: &[Interval]) -> Excerpt {
    let clamped: Vec<Interval> = marks
        .iter()
        .map(|m| m.clamp_to(doc.len()))
        .filter(|m| !m.is_empty())
        .collect();
    if clamped.is_empty() {
        return Excerpt::plain(doc.text());
    }
    let mut segments = Vec::with_capacity(clamped.len() * 2 + 1);
    push_marked(&mut segments, doc, Interval::new(0, doc.len()), &clamped);
    Excerpt::new(segments)
}

/// Emit `Plain` / `Highlighted` segments for `span`, skipping empty text.
fn push_marked(segments: &mut Vec<Segment>, doc: &Document<'_>, span: Interval, marks: &[Interval]) {
    let mut cursor = span.start;
    for mark in marks {
        if mark.start > cursor {
            segments.push(Segment::Plain(
                doc.slice(Interval::new(cursor, mark.start)).to_string(),
            ));
        }
        segments.push(Segment::Highlighted(doc.slice(*mark).to_string()));
        cursor = mark.end;
    }
    if cursor < span.end {
        segments.push(Segment::Plain(
            doc.slice(Interval::new(cursor, span.end)).to_string(),
        ));
    }
}
