// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Script awareness for scripts written without spaces between words.
//!
//! Chinese, Japanese, Thai and friends do not separate words with spaces, so
//! "snap to the nearest word boundary" has no whitespace to find. For those
//! scripts every codepoint boundary is treated as a legal cut, and single
//! characters are meaningful query terms.
//!
//! Which scripts count is configuration, not a hardcoded check: a `ScriptSet`
//! combines named Unicode scripts (`ScriptHint`) with arbitrary caller
//! predicates.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};

/// A Unicode script written without inter-word spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptHint {
    Han,
    Hiragana,
    Katakana,
    Bopomofo,
    Thai,
    Lao,
    Khmer,
    Myanmar,
}

impl ScriptHint {
    pub const ALL: [ScriptHint; 8] = [
        ScriptHint::Han,
        ScriptHint::Hiragana,
        ScriptHint::Katakana,
        ScriptHint::Bopomofo,
        ScriptHint::Thai,
        ScriptHint::Lao,
        ScriptHint::Khmer,
        ScriptHint::Myanmar,
    ];

    /// Scripts enabled when nothing is configured: every script known to be
    /// written without spaces.
    pub const DEFAULT: [ScriptHint; 8] = ScriptHint::ALL;

    /// Chinese and Japanese only.
    pub const CJK: [ScriptHint; 3] = [ScriptHint::Han, ScriptHint::Hiragana, ScriptHint::Katakana];

    /// Unicode `Script` property value name.
    pub fn property_name(self) -> &'static str {
        match self {
            ScriptHint::Han => "Han",
            ScriptHint::Hiragana => "Hiragana",
            ScriptHint::Katakana => "Katakana",
            ScriptHint::Bopomofo => "Bopomofo",
            ScriptHint::Thai => "Thai",
            ScriptHint::Lao => "Lao",
            ScriptHint::Khmer => "Khmer",
            ScriptHint::Myanmar => "Myanmar",
        }
    }

    /// True when `c` belongs to this script.
    pub fn matches(self, c: char) -> bool {
        if c.is_ascii() {
            return false;
        }
        let mut buf = [0u8; 4];
        SCRIPT_CLASSES[self as usize].is_match(c.encode_utf8(&mut buf))
    }
}

/// One compiled `\p{sc=...}` class per hint, indexed by discriminant.
static SCRIPT_CLASSES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ScriptHint::ALL
        .iter()
        .map(|hint| {
            Regex::new(&format!(r"\p{{sc={}}}", hint.property_name()))
                .expect("script names in ScriptHint are valid Unicode script properties")
        })
        .collect()
});

/// Caller-supplied "this character needs no spaces" test.
pub type ScriptPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// The set of scripts treated as boundary-safe at every codepoint.
#[derive(Clone)]
pub struct ScriptSet {
    hints: Vec<ScriptHint>,
    predicates: Vec<ScriptPredicate>,
}

impl ScriptSet {
    pub fn new(hints: &[ScriptHint]) -> Self {
        let mut unique: Vec<ScriptHint> = Vec::with_capacity(hints.len());
        for hint in hints {
            if !unique.contains(hint) {
                unique.push(*hint);
            }
        }
        ScriptSet {
            hints: unique,
            predicates: Vec::new(),
        }
    }

    /// No script is treated as space-free. Every cut must find whitespace.
    pub fn empty() -> Self {
        ScriptSet::new(&[])
    }

    /// Add a custom predicate, e.g. for a private-use range a site's font maps
    /// to ideographs.
    pub fn with_predicate(mut self, predicate: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        self.predicates.push(Arc::new(predicate));
        self
    }

    pub fn hints(&self) -> &[ScriptHint] {
        &self.hints
    }

    /// True when `c` belongs to a no-space script.
    pub fn is_no_space(&self, c: char) -> bool {
        self.hints.iter().any(|hint| hint.matches(c)) || self.predicates.iter().any(|p| p(c))
    }

    /// True when any character of `text` belongs to a no-space script.
    pub fn contains_no_space(&self, text: &str) -> bool {
        text.chars().any(|c| self.is_no_space(c))
    }
}

impl Default for ScriptSet {
    fn default() -> Self {
        ScriptSet::new(&ScriptHint::DEFAULT)
    }
}

impl fmt::Debug for ScriptSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptSet")
            .field("hints", &self.hints)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}
