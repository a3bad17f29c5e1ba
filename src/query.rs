// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query preparation.
//!
//! Before a query reaches the index it is normalized (case, accents, spacing)
//! and stripped of terms too short to be useful. One-letter terms match half
//! the site; a lone `-x` excludes next to nothing. Terms containing a
//! no-space-script character are always kept, since one ideograph is a word.
//!
//! A query made only of exclusions (`-foo -bar`) is refused. Against a small
//! site it is either "everything" or meaningless, and neither is a search.

use crate::error::QueryError;
use crate::script::ScriptSet;
use crate::util::normalize::normalize;

/// Minimum length (in characters) of a plain term.
pub const MIN_TERM_CHARS: usize = 2;

/// Minimum length of a `+`/`-` prefixed term, operator included.
pub const MIN_OPERATOR_TERM_CHARS: usize = 3;

/// Normalize raw user input: strip diacritics, lowercase, collapse whitespace.
pub fn normalize_query(raw: &str) -> String {
    normalize(raw)
}

fn has_operator(term: &str) -> bool {
    term.starts_with('+') || term.starts_with('-')
}

fn is_exclusion(term: &str) -> bool {
    term.starts_with('-')
}

/// True when a term is long enough to send to the index.
pub fn is_usable_term(term: &str, scripts: &ScriptSet) -> bool {
    if scripts.contains_no_space(term) {
        return true;
    }
    let min = if has_operator(term) {
        MIN_OPERATOR_TERM_CHARS
    } else {
        MIN_TERM_CHARS
    };
    term.chars().count() >= min
}

/// Drop unusable terms from a normalized query.
///
/// Returns the empty string when nothing usable is left, or when every
/// remaining term is an exclusion.
pub fn filter_terms(normalized: &str, scripts: &ScriptSet) -> String {
    let terms: Vec<&str> = normalized
        .split_whitespace()
        .filter(|term| is_usable_term(term, scripts))
        .collect();
    if terms.iter().all(|term| is_exclusion(term)) {
        return String::new();
    }
    terms.join(" ")
}

/// A query ready for the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// The normalized input, before term filtering. Use this as a memo key.
    pub normalized: String,
    /// The filtered query string to execute.
    pub query: String,
}

impl PreparedQuery {
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.query.split(' ')
    }

    /// Terms to search for, operators stripped. Exclusions are left out.
    pub fn positive_terms(&self) -> impl Iterator<Item = &str> {
        self.terms()
            .filter(|t| !is_exclusion(t))
            .map(|t| t.trim_start_matches('+'))
    }
}

/// Normalize and filter raw input.
///
/// `Err(Blank)` means there was nothing to search for at all (the UI should
/// simply clear); `Err(NoExecutableQuery)` means there was input but no usable
/// query (the UI should explain why).
pub fn prepare_query(raw: &str, scripts: &ScriptSet) -> Result<PreparedQuery, QueryError> {
    let normalized = normalize_query(raw);
    if normalized.is_empty() {
        return Err(QueryError::Blank);
    }
    let query = filter_terms(&normalized, scripts);
    if query.is_empty() {
        return Err(QueryError::NoExecutableQuery);
    }
    Ok(PreparedQuery { normalized, query })
}

/// Remembers the outcome of the last handled query.
///
/// Resubmitting an equivalent query (same normalized form, so differing only
/// in case, accents or spacing) reuses the previous outcome instead of
/// searching again. Keyed by `PreparedQuery::normalized`.
#[derive(Debug, Clone)]
pub struct QueryMemo<T> {
    last: Option<(String, T)>,
}

impl<T> Default for QueryMemo<T> {
    fn default() -> Self {
        QueryMemo { last: None }
    }
}

impl<T> QueryMemo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The remembered outcome, if `normalized` is the last handled query.
    pub fn get(&self, normalized: &str) -> Option<&T> {
        match &self.last {
            Some((key, outcome)) if key == normalized => Some(outcome),
            _ => None,
        }
    }

    pub fn remember(&mut self, normalized: impl Into<String>, outcome: T) {
        self.last = Some((normalized.into(), outcome));
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Return the remembered outcome or compute and remember a new one.
    ///
    /// The flag is `true` when the outcome came from the memo.
    pub fn get_or_insert_with(&mut self, normalized: &str, compute: impl FnOnce() -> T) -> (&T, bool) {
        let hit = self.get(normalized).is_some();
        let (_, outcome) = match self.last.take() {
            Some(last) if hit => self.last.insert(last),
            _ => self.last.insert((normalized.to_string(), compute())),
        };
        (&*outcome, hit)
    }
}
