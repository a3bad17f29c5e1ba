// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the window builder and renderer.
//!
//! Arbitrary text, arbitrary (often overlapping, often out-of-range) marks,
//! arbitrary radius. The excerpt must never panic, must stay inside the
//! text, and every window must render to exactly its slice.

#![no_main]

use arbitrary::Arbitrary;
use hitmark::{
    build_windows, merge_intervals, render_excerpt, snap_windows, Document, Interval, Segment,
    WordSnapper,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ExcerptInput {
    text: String,
    marks: Vec<(u16, u8)>,
    radius: u8,
    max_marks: u8,
    fallback: u8,
    snap: bool,
}

fuzz_target!(|input: ExcerptInput| {
    let doc = Document::new(&input.text);
    let marks = merge_intervals(
        input
            .marks
            .iter()
            .map(|&(offset, len)| Interval::from_offset_len(offset as usize, len as usize)),
    );
    let max_marks = (input.max_marks > 0).then_some(input.max_marks as usize);

    let mut windows = build_windows(doc.len(), &marks, input.radius as usize, max_marks);
    let snapper = WordSnapper::default();
    if input.snap {
        snap_windows(&mut windows, doc.chars(), &snapper);
    }
    let excerpt = render_excerpt(&doc, &windows, input.fallback as usize, input.snap.then_some(&snapper));

    // Everything shown comes from the text, in order
    let shown: String = excerpt.iter().filter_map(Segment::text).collect();
    if windows.is_empty() {
        assert!(input.text.starts_with(&shown));
    } else {
        let expected: String = windows.iter().map(|w| doc.slice(w.span)).collect();
        assert_eq!(shown, expected);
    }

    for pair in excerpt.segments.windows(2) {
        assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()));
    }
});
