// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word boundary snapping.
//!
//! A context window cut at "radius characters around the match" usually lands
//! mid-word: `…ick brow…`. Snapping walks each cut toward the match until it
//! sits on a word boundary, so the excerpt shows whole words only.
//!
//! # The walk
//!
//! Forward (window start): finish the partial word, skip the separator run,
//! stop at the start of the next word. Backward (window end): drop the partial
//! word, skip the separator run, stop just after the previous word.
//!
//! ```text
//!   text:    T h e _ q u i c k _ b r o w n _ f o x
//!   cut:                             ^ 13 (backward, limit 9)
//!   walk:                    <-----  drop "bro", skip "_"
//!   result:                  ^ 9
//! ```
//!
//! The walk never passes `limit`, which callers set to the edge of the nearest
//! highlight. A cut next to a character of a no-space script (Han, kana, …)
//! is already legal and never moves.

use crate::script::ScriptSet;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Which way a cut may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move right: used for a window's start.
    Forward,
    /// Move left: used for a window's end.
    Backward,
}

/// Letters, combining marks, connector punctuation, and join controls.
static WORD_FORMING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{Pc}\p{Join_Control}]")
        .expect("word-forming class uses valid Unicode properties")
});

/// True for characters that are part of a word.
///
/// Digits and symbols are separators, matching how a highlight of a word
/// inside "v2.0" should read.
pub fn is_word_forming(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '_';
    }
    let mut buf = [0u8; 4];
    WORD_FORMING.is_match(c.encode_utf8(&mut buf))
}

/// Snaps cut positions to word boundaries.
#[derive(Debug, Clone, Default)]
pub struct WordSnapper {
    scripts: ScriptSet,
}

impl WordSnapper {
    pub fn new(scripts: ScriptSet) -> Self {
        WordSnapper { scripts }
    }

    pub fn scripts(&self) -> &ScriptSet {
        &self.scripts
    }

    /// Move `index` to the nearest word boundary in `direction`, never past `limit`.
    ///
    /// `index` and `limit` are character offsets into `text` and are clamped
    /// to `text.len()`. A forward snap returns a value in `[index, limit]`
    /// (or `index` when `limit <= index`); a backward snap returns a value in
    /// `[limit, index]` (or `index` when `limit >= index`).
    ///
    /// Returns `index` unchanged when it is already a boundary for the
    /// direction: the text start or a word start going forward, the text end
    /// or a word end going backward.
    pub fn snap(&self, text: &[char], index: usize, limit: usize, direction: Direction) -> usize {
        let index = index.min(text.len());
        let limit = limit.min(text.len());
        let snapped = match direction {
            Direction::Forward => self.snap_forward(text, index, limit),
            Direction::Backward => self.snap_backward(text, index, limit),
        };
        if snapped != index {
            trace!(index, limit, snapped, ?direction, "snapped cut to word boundary");
        }
        snapped
    }

    fn snap_forward(&self, text: &[char], index: usize, limit: usize) -> usize {
        if index == 0 || index >= limit || self.touches_no_space(text, index) {
            return index;
        }
        // index < limit <= len, and index > 0
        let word = |i: usize| is_word_forming(text[i]);
        if word(index) && !word(index - 1) {
            return index;
        }

        let mut i = index;
        while i < limit && word(i) && !self.scripts.is_no_space(text[i]) {
            i += 1;
        }
        while i < limit && !word(i) {
            i += 1;
        }
        i
    }

    fn snap_backward(&self, text: &[char], index: usize, limit: usize) -> usize {
        if index == text.len() || index <= limit || self.touches_no_space(text, index) {
            return index;
        }
        // limit < index < len
        let word = |i: usize| is_word_forming(text[i]);
        if word(index - 1) && !word(index) {
            return index;
        }

        let mut i = index;
        while i > limit && word(i - 1) && !self.scripts.is_no_space(text[i - 1]) {
            i -= 1;
        }
        while i > limit && !word(i - 1) {
            i -= 1;
        }
        i
    }

    /// A cut with a no-space-script character on either side is always legal.
    fn touches_no_space(&self, text: &[char], index: usize) -> bool {
        let before = index.checked_sub(1).and_then(|i| text.get(i));
        let after = text.get(index);
        before
            .into_iter()
            .chain(after)
            .any(|&c| self.scripts.is_no_space(c))
    }
}
