// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpt configuration.
//!
//! Every option has a default, so `{}` is a valid config. Field names are
//! camelCase in JSON to match what a site template hands the browser.
//!
//! ```json
//! {
//!   "contextRadius": 45,
//!   "maxMarksPerResult": 0,
//!   "fallbackExcerptLength": 100,
//!   "maxResults": 0,
//!   "snapToWords": true,
//!   "supportedScripts": ["han", "hiragana", "katakana", "bopomofo", "thai", "lao", "khmer", "myanmar"],
//!   "searchFields": ["title", "author", "content"],
//!   "excerptFields": ["content"],
//!   "offsetUnit": "chars"
//! }
//! ```

use crate::error::ConfigError;
use crate::script::{ScriptHint, ScriptSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Characters of context shown on each side of a highlight.
pub const DEFAULT_CONTEXT_RADIUS: usize = 45;

/// Characters shown when a field has no highlight.
pub const DEFAULT_FALLBACK_EXCERPT_LENGTH: usize = 100;

/// Upper bound on `contextRadius`. Anything larger is a typo, not a design.
pub const MAX_CONTEXT_RADIUS: usize = 10_000;

/// Unit the index reports match offsets in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// UTF-16 code units (JavaScript string indices).
    Utf16,
}

/// The `offsetUnit` key of a config on its own, so an unset unit can be told
/// apart from an explicit `"chars"`.
///
/// Configs handed over from JavaScript come with JavaScript string indices:
/// lunr-style `matchData` positions count UTF-16 code units. Deserialize the
/// same value into this and into [`ExcerptConfig`], then combine them with
/// [`ExcerptConfig::with_browser_offsets`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestedOffsetUnit {
    pub offset_unit: Option<OffsetUnit>,
}

/// Options for windowing, snapping and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExcerptConfig {
    /// Characters of context per side of a highlight.
    pub context_radius: usize,
    /// Highlights considered per field before clustering (0 = unlimited).
    pub max_marks_per_result: usize,
    /// Characters shown for an excerpt field with no highlight.
    pub fallback_excerpt_length: usize,
    /// Hits rendered per result list (0 = all).
    pub max_results: usize,
    /// Snap window edges to word boundaries.
    pub snap_to_words: bool,
    /// Scripts written without spaces between words.
    pub supported_scripts: Vec<ScriptHint>,
    /// Fields rendered for each page.
    pub search_fields: Vec<String>,
    /// Fields rendered as windowed excerpts; the rest are highlighted in full.
    pub excerpt_fields: Vec<String>,
    pub offset_unit: OffsetUnit,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            max_marks_per_result: 0,
            fallback_excerpt_length: DEFAULT_FALLBACK_EXCERPT_LENGTH,
            max_results: 0,
            snap_to_words: true,
            supported_scripts: ScriptHint::DEFAULT.to_vec(),
            search_fields: vec!["title".into(), "author".into(), "content".into()],
            excerpt_fields: vec!["content".into()],
            offset_unit: OffsetUnit::Chars,
        }
    }
}

impl ExcerptConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ExcerptConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.context_radius > MAX_CONTEXT_RADIUS {
            return Err(ConfigError::Invalid(format!(
                "contextRadius {} exceeds {}",
                self.context_radius, MAX_CONTEXT_RADIUS
            )));
        }
        for (key, fields) in [
            ("searchFields", &self.search_fields),
            ("excerptFields", &self.excerpt_fields),
        ] {
            if fields.iter().any(|f| f.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!("{key} contains an empty field name")));
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    #[must_use]
    pub const fn with_max_marks_per_result(mut self, max: usize) -> Self {
        self.max_marks_per_result = max;
        self
    }

    #[must_use]
    pub const fn with_fallback_excerpt_length(mut self, length: usize) -> Self {
        self.fallback_excerpt_length = length;
        self
    }

    #[must_use]
    pub const fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    #[must_use]
    pub const fn with_snap_to_words(mut self, snap: bool) -> Self {
        self.snap_to_words = snap;
        self
    }

    #[must_use]
    pub const fn with_offset_unit(mut self, unit: OffsetUnit) -> Self {
        self.offset_unit = unit;
        self
    }

    /// Offset unit for browser callers: UTF-16 unless the caller asked for
    /// something else.
    #[must_use]
    pub fn with_browser_offsets(self, requested: RequestedOffsetUnit) -> Self {
        self.with_offset_unit(requested.offset_unit.unwrap_or(OffsetUnit::Utf16))
    }

    #[must_use]
    pub fn with_supported_scripts(mut self, scripts: &[ScriptHint]) -> Self {
        self.supported_scripts = scripts.to_vec();
        self
    }

    #[must_use]
    pub fn with_excerpt_fields(mut self, fields: &[&str]) -> Self {
        self.excerpt_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Mark cap, `None` when unlimited.
    pub fn max_marks(&self) -> Option<usize> {
        (self.max_marks_per_result > 0).then_some(self.max_marks_per_result)
    }

    /// Result cap, `None` when unlimited.
    pub fn result_limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }

    pub fn is_excerpt_field(&self, field: &str) -> bool {
        self.excerpt_fields.iter().any(|f| f == field)
    }

    pub fn script_set(&self) -> ScriptSet {
        ScriptSet::new(&self.supported_scripts)
    }
}
