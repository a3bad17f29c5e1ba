//! Windows stay in bounds and in order, own each mark once, and render to
//! exactly their slice of the text.

use super::common::{assert_windows_well_formed, char_slice, highlighted_texts, window_texts};
use hitmark::{
    build_windows, merge_intervals, render_excerpt, snap_windows, ContextWindow, Document,
    Interval, WordSnapper,
};
use proptest::prelude::*;

/// Latin words and CJK runs separated by spaces or punctuation.
fn text_strategy() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        4 => "[a-z]{1,8}",
        1 => "[\u{6771}\u{4eac}\u{5929}\u{6c17}\u{306e}]{1,4}",
        1 => "[0-9]{1,3}",
    ];
    let sep = prop_oneof![4 => Just(" "), 1 => Just(", "), 1 => Just(" - ")];
    prop::collection::vec((word, sep), 0..30).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, s)| format!("{}{}", w, s))
            .collect::<String>()
    })
}

/// Text plus raw marks that may overlap, repeat, or run past the end.
fn case_strategy() -> impl Strategy<Value = (String, Vec<Interval>, usize, bool)> {
    text_strategy().prop_flat_map(|text| {
        let len = text.chars().count();
        let mark = (0..len + 5, 0usize..12).prop_map(|(s, l)| Interval::from_offset_len(s, l));
        (
            Just(text),
            prop::collection::vec(mark, 0..8),
            0usize..20,
            any::<bool>(),
        )
    })
}

fn pipeline(text: &str, raw: &[Interval], radius: usize, snap: bool) -> (Vec<Interval>, Vec<ContextWindow>) {
    let doc = Document::new(text);
    let marks = merge_intervals(raw.iter().copied());
    let mut windows = build_windows(doc.len(), &marks, radius, None);
    if snap {
        snap_windows(&mut windows, doc.chars(), &WordSnapper::default());
    }
    let kept = marks
        .iter()
        .map(|m| m.clamp_to(doc.len()))
        .filter(|m| !m.is_empty())
        .collect();
    (kept, windows)
}

proptest! {
    #[test]
    fn prop_windows_well_formed((text, raw, radius, snap) in case_strategy()) {
        let (_, windows) = pipeline(&text, &raw, radius, snap);
        assert_windows_well_formed(&windows, text.chars().count());
    }

    #[test]
    fn prop_each_mark_in_exactly_one_window((text, raw, radius, snap) in case_strategy()) {
        let (kept, windows) = pipeline(&text, &raw, radius, snap);
        let owned: Vec<Interval> = windows.iter().flat_map(|w| w.marks.iter().copied()).collect();
        prop_assert_eq!(&owned, &kept);
        for mark in &kept {
            let owners = windows.iter().filter(|w| w.span.contains(mark)).count();
            prop_assert_eq!(owners, 1, "mark {:?} in {} windows", mark, owners);
        }
    }

    #[test]
    fn prop_render_reproduces_window_slices((text, raw, radius, snap) in case_strategy()) {
        let (kept, windows) = pipeline(&text, &raw, radius, snap);
        let doc = Document::new(&text);
        let excerpt = render_excerpt(&doc, &windows, 100, None);

        if windows.is_empty() {
            prop_assert_eq!(excerpt.highlight_count(), 0);
            return Ok(());
        }

        let expected: Vec<String> = windows.iter().map(|w| char_slice(&text, w.span)).collect();
        prop_assert_eq!(window_texts(&excerpt), expected);

        let marks: Vec<String> = kept.iter().map(|m| char_slice(&text, *m)).collect();
        prop_assert_eq!(highlighted_texts(&excerpt), marks);

        let len = doc.len();
        let ellipses = excerpt.iter().filter(|s| s.is_ellipsis()).count();
        let expected_ellipses = windows.len() - 1
            + usize::from(windows[0].span.start > 0)
            + usize::from(windows[windows.len() - 1].span.end < len);
        prop_assert_eq!(ellipses, expected_ellipses);
    }

    #[test]
    fn prop_snapping_only_shrinks((text, raw, radius, _snap) in case_strategy()) {
        let (_, raw_windows) = pipeline(&text, &raw, radius, false);
        let (_, snapped) = pipeline(&text, &raw, radius, true);
        prop_assert_eq!(raw_windows.len(), snapped.len());
        for (before, after) in raw_windows.iter().zip(&snapped) {
            prop_assert!(before.span.contains(&after.span));
            prop_assert_eq!(&before.marks, &after.marks);
        }
    }
}
