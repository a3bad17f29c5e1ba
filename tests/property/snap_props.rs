//! Snapping stays between the cut and its limit, is a no-op on boundaries,
//! and never moves inside logographic text.

use hitmark::{is_word_forming, Direction, WordSnapper};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = Vec<char>> {
    "[a-z ,.0-9\u{e9}\u{301}\u{6771}\u{4eac}]{0,40}".prop_map(|s| s.chars().collect())
}

fn case_strategy() -> impl Strategy<Value = (Vec<char>, usize, usize)> {
    text_strategy().prop_flat_map(|text| {
        let len = text.len();
        (Just(text), 0..=len, 0..=len)
    })
}

fn is_word_start(text: &[char], i: usize) -> bool {
    i < text.len() && is_word_forming(text[i]) && (i == 0 || !is_word_forming(text[i - 1]))
}

fn is_word_end(text: &[char], i: usize) -> bool {
    i > 0 && is_word_forming(text[i - 1]) && (i == text.len() || !is_word_forming(text[i]))
}

proptest! {
    #[test]
    fn prop_forward_stays_between_index_and_limit((text, index, limit) in case_strategy()) {
        let snapped = WordSnapper::default().snap(&text, index, limit, Direction::Forward);
        if limit <= index {
            prop_assert_eq!(snapped, index);
        } else {
            prop_assert!(index <= snapped && snapped <= limit);
        }
    }

    #[test]
    fn prop_backward_stays_between_limit_and_index((text, index, limit) in case_strategy()) {
        let snapped = WordSnapper::default().snap(&text, index, limit, Direction::Backward);
        if limit >= index {
            prop_assert_eq!(snapped, index);
        } else {
            prop_assert!(limit <= snapped && snapped <= index);
        }
    }

    #[test]
    fn prop_snap_is_idempotent((text, index, limit) in case_strategy()) {
        let snapper = WordSnapper::default();
        for direction in [Direction::Forward, Direction::Backward] {
            let once = snapper.snap(&text, index, limit, direction);
            prop_assert_eq!(snapper.snap(&text, once, limit, direction), once);
        }
    }

    #[test]
    fn prop_boundaries_are_fixed_points((text, index, limit) in case_strategy()) {
        let snapper = WordSnapper::default();
        if is_word_start(&text, index) {
            prop_assert_eq!(snapper.snap(&text, index, limit, Direction::Forward), index);
        }
        if is_word_end(&text, index) {
            prop_assert_eq!(snapper.snap(&text, index, limit, Direction::Backward), index);
        }
    }

    #[test]
    fn prop_logographic_text_never_moves(
        text in "[\u{6771}\u{4eac}\u{5929}\u{6c17}\u{306e}\u{30ab}]{1,20}",
        index in 0usize..25,
        limit in 0usize..25,
    ) {
        let text: Vec<char> = text.chars().collect();
        let snapper = WordSnapper::default();
        let index = index.min(text.len());
        for direction in [Direction::Forward, Direction::Backward] {
            prop_assert_eq!(snapper.snap(&text, index, limit, direction), index);
        }
    }
}
