// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering search hits.
//!
//! `Highlighter` ties the excerpt stages together for whole pages: it collects
//! the match positions of a hit per field, then renders each searchable field.
//! Long fields (`excerptFields`, usually just `content`) become windowed
//! excerpts; short ones (title, author) are shown in full with their matches
//! highlighted.
//!
//! The highlighter holds configuration only. Every call takes its text and
//! matches as arguments and returns a fresh result.

use crate::config::{ExcerptConfig, OffsetUnit};
use crate::document::Document;
use crate::error::QueryError;
use crate::excerpt::{
    build_windows, collect_field_matches, merge_intervals, render_excerpt, render_full,
    snap_windows, WordSnapper,
};
use crate::query::{prepare_query, PreparedQuery};
use crate::script::ScriptSet;
use crate::types::{
    Excerpt, HighlightedPage, HitList, Interval, MatchMetadata, Page, SearchHit,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Highlighter {
    config: ExcerptConfig,
    snapper: WordSnapper,
}

impl Default for Highlighter {
    fn default() -> Self {
        Highlighter::new(ExcerptConfig::default())
    }
}

impl Highlighter {
    pub fn new(config: ExcerptConfig) -> Self {
        let scripts = config.script_set();
        Highlighter::with_scripts(config, scripts)
    }

    /// Use a custom script set instead of the one named in the config, e.g.
    /// one carrying extra predicates.
    pub fn with_scripts(config: ExcerptConfig, scripts: ScriptSet) -> Self {
        Highlighter {
            config,
            snapper: WordSnapper::new(scripts),
        }
    }

    pub fn config(&self) -> &ExcerptConfig {
        &self.config
    }

    pub fn scripts(&self) -> &ScriptSet {
        self.snapper.scripts()
    }

    /// Normalize and filter a raw query with this highlighter's script set.
    pub fn prepare_query(&self, raw: &str) -> Result<PreparedQuery, QueryError> {
        prepare_query(raw, self.scripts())
    }

    /// Windowed excerpt of `text` around `marks` (character offsets, any order).
    pub fn excerpt(&self, text: &str, marks: &[Interval]) -> Excerpt {
        let doc = Document::new(text);
        let marks = merge_intervals(marks.iter().copied());
        self.excerpt_doc(&doc, &marks)
    }

    /// `text` in full, with `marks` highlighted.
    pub fn highlight_field(&self, text: &str, marks: &[Interval]) -> Excerpt {
        let doc = Document::new(text);
        render_full(&doc, &merge_intervals(marks.iter().copied()))
    }

    fn excerpt_doc(&self, doc: &Document<'_>, marks: &[Interval]) -> Excerpt {
        let mut windows = build_windows(
            doc.len(),
            marks,
            self.config.context_radius,
            self.config.max_marks(),
        );
        let snapper = self.config.snap_to_words.then_some(&self.snapper);
        if let Some(snapper) = snapper {
            snap_windows(&mut windows, doc.chars(), snapper);
        }
        render_excerpt(doc, &windows, self.config.fallback_excerpt_length, snapper)
    }

    /// Render every configured field of `page` using one hit's match metadata.
    ///
    /// Fields missing from the page (or not strings) are skipped. A field
    /// without matches renders as the fallback excerpt or plain text.
    pub fn highlight_page(&self, reference: &str, score: f64, page: &Page, metadata: &MatchMetadata) -> HighlightedPage {
        let matches = collect_field_matches(metadata);
        let mut fields = BTreeMap::new();

        for name in &self.config.search_fields {
            let Some(text) = page.field(name) else {
                continue;
            };
            let doc = Document::new(text);
            let marks = match (matches.get(name), self.config.offset_unit) {
                (None, _) => Vec::new(),
                (Some(marks), OffsetUnit::Chars) => marks.clone(),
                (Some(marks), OffsetUnit::Utf16) => {
                    merge_intervals(marks.iter().map(|m| doc.utf16_interval(*m)))
                }
            };

            let excerpt = if self.config.is_excerpt_field(name) {
                self.excerpt_doc(&doc, &marks)
            } else {
                render_full(&doc, &marks)
            };
            fields.insert(name.clone(), excerpt);
        }

        HighlightedPage {
            reference: reference.to_string(),
            href: page.href.clone(),
            date: page.date.clone(),
            score,
            fields,
        }
    }

    /// Render a result list the way the site shows it.
    ///
    /// Hits are rendered in order, up to `maxResults`. A hit whose reference
    /// does not name a page is skipped with a warning. `total` is the number
    /// of hits the index returned, rendered or not.
    pub fn highlight_hits(&self, pages: &[Page], hits: &[SearchHit]) -> HitList {
        let limit = self.config.result_limit().unwrap_or(hits.len());
        let mut rendered = Vec::with_capacity(limit.min(hits.len()));

        for hit in hits.iter().take(limit) {
            let Some(page) = hit.reference.parse::<usize>().ok().and_then(|i| pages.get(i)) else {
                warn!(reference = %hit.reference, pages = pages.len(), "hit references an unknown page");
                continue;
            };
            rendered.push(self.highlight_page(&hit.reference, hit.score, page, &hit.match_data.metadata));
        }

        debug!(total = hits.len(), rendered = rendered.len(), "rendered result list");
        HitList {
            total: hits.len(),
            pages: rendered,
        }
    }
}
