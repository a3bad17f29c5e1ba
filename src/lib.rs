// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighted search excerpts for static site search.
//!
//! A static site ships its pages and an index to the browser; the index says
//! *which* pages match and *where*. This crate turns the "where" into what the
//! reader sees: short excerpts with the matches highlighted, cut on word
//! boundaries, with ellipses where text was skipped.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────────────────────────────────────────┐
//! │   query.rs   │   │                     excerpt/                        │
//! │ (normalize,  │   │  merge.rs ──▶ window.rs ──▶ boundary.rs ──▶ render.rs│
//! │ filter_terms)│   │ (intervals)  (clusters)    (word snap)    (segments)│
//! └──────────────┘   └─────────────────────────────────────────────────────┘
//!        │                                 ▲
//!        ▼                                 │
//!   external index ──▶ match metadata ──▶ highlight.rs (Highlighter)
//! ```
//!
//! Offsets are character (Unicode scalar value) offsets throughout. Indexes
//! that report UTF-16 offsets are handled with `OffsetUnit::Utf16`.
//!
//! # Usage
//!
//! ```
//! use hitmark::{ExcerptConfig, Highlighter, Interval, Segment};
//!
//! let highlighter = Highlighter::new(ExcerptConfig::new().with_context_radius(6));
//! let excerpt = highlighter.excerpt("The quick brown fox jumps", &[Interval::new(4, 9)]);
//!
//! assert_eq!(excerpt.segments[1], Segment::Highlighted("quick".to_string()));
//! assert_eq!(excerpt.to_plain_text("…"), "The quick brown…");
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod document;
pub mod error;
pub mod excerpt;
mod highlight;
pub mod query;
pub mod script;
#[doc(hidden)]
pub mod testing;
mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{
    ExcerptConfig, OffsetUnit, RequestedOffsetUnit, DEFAULT_CONTEXT_RADIUS, DEFAULT_FALLBACK_EXCERPT_LENGTH,
};
pub use document::Document;
pub use error::{ConfigError, QueryError};
pub use excerpt::{
    build_windows, collect_field_matches, is_word_forming, merge_intervals, render_excerpt,
    render_fallback, render_full, render_windows, snap_windows, Direction, WordSnapper,
};
pub use highlight::Highlighter;
pub use query::{filter_terms, normalize_query, prepare_query, PreparedQuery, QueryMemo};
pub use script::{ScriptHint, ScriptSet};
pub use types::{
    ContextWindow, Excerpt, FieldMatches, FieldPositions, HighlightedPage, HitList, Interval,
    MatchData, MatchMetadata, Page, SearchHit, Segment, TermPosition,
};
pub use util::normalize::normalize;
