// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{
    Excerpt, FieldPositions, Interval, MatchData, MatchMetadata, Page, SearchHit, Segment,
    TermPosition,
};

/// Build intervals from `(start, end)` pairs.
pub fn intervals(pairs: &[(usize, usize)]) -> Vec<Interval> {
    pairs.iter().map(|&p| p.into()).collect()
}

/// Build match metadata from `(term, field, [(offset, length)])` triples.
pub fn make_metadata(entries: &[(&str, &str, &[(usize, usize)])]) -> MatchMetadata {
    let mut metadata = MatchMetadata::new();
    for (term, field, positions) in entries {
        metadata
            .entry(term.to_string())
            .or_default()
            .entry(field.to_string())
            .or_insert_with(FieldPositions::default)
            .position
            .extend(positions.iter().map(|&(o, l)| TermPosition(o, l)));
    }
    metadata
}

/// Create a page with the three standard searchable fields.
pub fn make_page(id: usize, title: &str, author: &str, content: &str) -> Page {
    Page {
        href: format!("/posts/{}/", id),
        date: "2024-05-01".to_string(),
        ..Page::default()
    }
    .with_field("title", title)
    .with_field("author", author)
    .with_field("content", content)
}

/// Create a hit referencing page `reference`.
pub fn make_hit(reference: usize, score: f64, metadata: MatchMetadata) -> SearchHit {
    SearchHit {
        reference: reference.to_string(),
        score,
        match_data: MatchData { metadata },
    }
}

/// Text of each window of an excerpt, split at ellipsis markers.
pub fn window_texts(excerpt: &Excerpt) -> Vec<String> {
    let mut windows = Vec::new();
    let mut current = String::new();
    for segment in excerpt {
        match segment {
            Segment::Ellipsis => {
                if !current.is_empty() {
                    windows.push(std::mem::take(&mut current));
                }
            }
            Segment::Plain(text) | Segment::Highlighted(text) => current.push_str(text),
        }
    }
    if !current.is_empty() {
        windows.push(current);
    }
    windows
}

/// Highlighted texts of an excerpt, in order.
pub fn highlighted_texts(excerpt: &Excerpt) -> Vec<&str> {
    excerpt
        .iter()
        .filter(|s| s.is_highlighted())
        .filter_map(Segment::text)
        .collect()
}
