// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character-indexed view over one field's text.
//!
//! Match offsets count characters (Unicode scalar values), but Rust strings
//! slice by byte. `Document` keeps the byte offset of every character so the
//! renderer can hand out `&str` slices for any character interval without
//! re-walking the string. A UTF-16 offset table built alongside it makes
//! JavaScript string indices convertible by binary search.

use crate::types::Interval;

/// Borrowed field text with a character → byte offset table.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each character, plus `text.len()` as the final entry.
    byte_offsets: Vec<usize>,
    /// UTF-16 offset of each character, plus the total unit count.
    utf16_offsets: Vec<usize>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        let mut utf16_offsets = Vec::with_capacity(text.len() + 1);
        let mut units = 0usize;
        for (offset, c) in text.char_indices() {
            chars.push(c);
            byte_offsets.push(offset);
            utf16_offsets.push(units);
            units += c.len_utf16();
        }
        byte_offsets.push(text.len());
        utf16_offsets.push(units);
        Document {
            text,
            chars,
            byte_offsets,
            utf16_offsets,
        }
    }

    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Text covered by a character interval. Out-of-range ends are clamped.
    pub fn slice(&self, span: Interval) -> &'a str {
        let span = span.clamp_to(self.len());
        if span.is_empty() {
            return "";
        }
        &self.text[self.byte_offsets[span.start]..self.byte_offsets[span.end]]
    }

    /// Convert a UTF-16 code unit offset to a character offset.
    ///
    /// An offset pointing into the middle of a surrogate pair rounds up to the
    /// next character. Offsets past the end clamp to `len()`.
    pub fn utf16_to_char(&self, unit: usize) -> usize {
        self.utf16_offsets
            .partition_point(|&start| start < unit)
            .min(self.len())
    }

    /// Convert a UTF-16 interval to a character interval.
    pub fn utf16_interval(&self, span: Interval) -> Interval {
        Interval::new(self.utf16_to_char(span.start), self.utf16_to_char(span.end))
    }
}
