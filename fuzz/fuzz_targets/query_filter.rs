// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query normalization and term filtering.
//!
//! Arbitrary user input must normalize without panicking, normalization must
//! be stable, and an accepted query must contain a non-exclusion term.

#![no_main]

use hitmark::{normalize_query, prepare_query, QueryError, ScriptSet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    let scripts = ScriptSet::default();
    let normalized = normalize_query(raw);
    assert_eq!(normalize_query(&normalized), normalized);

    match prepare_query(raw, &scripts) {
        Ok(prepared) => {
            assert_eq!(prepared.normalized, normalized);
            assert!(!prepared.query.is_empty());
            assert!(prepared.terms().any(|t| !t.starts_with('-')));
        }
        Err(QueryError::Blank) => assert!(normalized.is_empty()),
        Err(QueryError::NoExecutableQuery) => assert!(!normalized.is_empty()),
    }
});
