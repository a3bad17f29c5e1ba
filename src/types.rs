// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes that flow through the excerpt engine.
//!
//! Index lookups hand us per-term, per-field match positions; we hand back an
//! ordered list of segments per field. Everything in between is built from the
//! handful of types defined here.
//!
//! | Type             | Role                                                |
//! |------------------|-----------------------------------------------------|
//! | `Interval`       | Half-open `[start, end)` range of char offsets      |
//! | `TermPosition`   | Raw `(offset, length)` pair from the index          |
//! | `MatchMetadata`  | term → field → positions, as the index returns it   |
//! | `FieldMatches`   | field → merged intervals, one document hit          |
//! | `ContextWindow`  | An excerpt slice plus the marks it contains         |
//! | `Segment`        | Plain / highlighted text or an ellipsis marker      |
//! | `Excerpt`        | Ordered segments for one field                      |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Interval**: `start <= end`. Empty intervals are dropped by the merger.
//!
//! - **ContextWindow**: every mark lies inside `span`; marks are sorted and
//!   disjoint. Consecutive windows never overlap.
//!
//! - **Excerpt**: segments appear in document order.
//!
//! The checks live in `contracts`, and run in debug builds only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// INTERVALS
// =============================================================================

/// Half-open range of character offsets into one field's text.
///
/// Offsets count Unicode scalar values, NOT bytes. A `TermPosition` reported in
/// UTF-16 code units must be converted with `Document::utf16_interval` first.
///
/// The derived ordering (by `start`, then `end`) is the ordering the merger sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Interval { start, end }
    }

    /// Build from an index-reported `(offset, length)` pair.
    #[inline]
    pub const fn from_offset_len(offset: usize, length: usize) -> Self {
        Interval {
            start: offset,
            end: offset.saturating_add(length),
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when `other` lies entirely inside `self`.
    #[inline]
    pub const fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Clamp both ends to `[0, upper]`.
    #[inline]
    pub fn clamp_to(self, upper: usize) -> Self {
        Interval {
            start: self.start.min(upper),
            end: self.end.min(upper),
        }
    }
}

impl From<(usize, usize)> for Interval {
    fn from((start, end): (usize, usize)) -> Self {
        Interval::new(start, end)
    }
}

/// One `[offset, length]` pair as the index reports it.
///
/// Serialized as a two-element array, which is the shape lunr-style
/// `matchData.metadata[term][field].position` entries use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPosition(pub usize, pub usize);

impl TermPosition {
    #[inline]
    pub fn to_interval(self) -> Interval {
        Interval::from_offset_len(self.0, self.1)
    }
}

/// Positions of one query term within one field.
///
/// Other metadata keys the index may attach are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPositions {
    #[serde(default)]
    pub position: Vec<TermPosition>,
}

/// Raw match metadata for one hit: term → field → positions.
pub type MatchMetadata = BTreeMap<String, BTreeMap<String, FieldPositions>>;

/// Merged highlight intervals per field for one hit.
pub type FieldMatches = BTreeMap<String, Vec<Interval>>;

// =============================================================================
// WINDOWS AND SEGMENTS
// =============================================================================

/// A contiguous excerpt slice and the highlights that fall inside it.
///
/// Marks are in document coordinates, not relative to `span.start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextWindow {
    pub span: Interval,
    pub marks: Vec<Interval>,
}

/// One piece of a rendered excerpt.
///
/// Serializes as `{"kind": "plain", "text": "..."}`, `{"kind": "highlighted", ...}`
/// or `{"kind": "ellipsis"}` so a UI layer can build nodes without ever
/// concatenating page text into markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Highlighted(String),
    Ellipsis,
}

impl Segment {
    /// The segment's text, `None` for ellipsis markers.
    pub fn text(&self) -> Option<&str> {
        match self {
            Segment::Plain(text) | Segment::Highlighted(text) => Some(text),
            Segment::Ellipsis => None,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted(_))
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Segment::Ellipsis)
    }
}

/// Ordered segments for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Excerpt {
    pub segments: Vec<Segment>,
}

impl Excerpt {
    pub fn new(segments: Vec<Segment>) -> Self {
        Excerpt { segments }
    }

    /// A single unhighlighted segment, or nothing for empty text.
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Excerpt::default();
        }
        Excerpt {
            segments: vec![Segment::Plain(text.to_string())],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn highlight_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_highlighted()).count()
    }

    /// Flatten to a string, rendering ellipsis markers as `ellipsis`.
    pub fn to_plain_text(&self, ellipsis: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.text() {
                Some(text) => out.push_str(text),
                None => out.push_str(ellipsis),
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Excerpt {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

// =============================================================================
// HITS AND PAGES
// =============================================================================

/// A stored page record, as shipped in the site's search payload.
///
/// `href` and `date` are display-only. Every other key lands in `fields`;
/// string-valued entries can be searched and highlighted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub date: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl Page {
    /// Text of a string-valued field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(serde_json::Value::as_str)
    }

    /// Set a string field, returning `self` for chaining.
    pub fn with_field(mut self, name: &str, text: &str) -> Self {
        self.fields
            .insert(name.to_string(), serde_json::Value::String(text.to_string()));
        self
    }
}

/// Per-hit match data wrapper (`matchData` in the index's result objects).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchData {
    #[serde(default)]
    pub metadata: MatchMetadata,
}

/// One result of an index lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Position of the page in the page list, as a string.
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub match_data: MatchData,
}

/// A page with every searchable field rendered to segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedPage {
    #[serde(rename = "ref")]
    pub reference: String,
    pub href: String,
    pub date: String,
    pub score: f64,
    pub fields: BTreeMap<String, Excerpt>,
}

impl HighlightedPage {
    pub fn field(&self, name: &str) -> Option<&Excerpt> {
        self.fields.get(name)
    }
}

/// Rendered result list.
///
/// `total` counts every hit the index returned; `pages` holds the rendered
/// ones, capped by `maxResults`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitList {
    pub total: usize,
    pub pages: Vec<HighlightedPage>,
}
