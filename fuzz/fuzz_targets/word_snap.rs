// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for word boundary snapping.
//!
//! The snapped cut must lie between the original cut and its limit, and
//! snapping an already-snapped cut must not move it again.

#![no_main]

use arbitrary::Arbitrary;
use hitmark::{Direction, ScriptHint, ScriptSet, WordSnapper};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SnapInput {
    text: String,
    index: u16,
    limit: u16,
    forward: bool,
    all_scripts: bool,
}

fuzz_target!(|input: SnapInput| {
    let text: Vec<char> = input.text.chars().collect();
    let scripts = if input.all_scripts {
        ScriptSet::new(&ScriptHint::ALL)
    } else {
        ScriptSet::default()
    };
    let snapper = WordSnapper::new(scripts);
    let direction = if input.forward {
        Direction::Forward
    } else {
        Direction::Backward
    };

    let index = (input.index as usize).min(text.len());
    let limit = (input.limit as usize).min(text.len());
    let snapped = snapper.snap(&text, index, limit, direction);

    match direction {
        Direction::Forward if limit > index => assert!(index <= snapped && snapped <= limit),
        Direction::Backward if limit < index => assert!(limit <= snapped && snapped <= index),
        _ => assert_eq!(snapped, index),
    }
    assert_eq!(snapper.snap(&text, snapped, limit, direction), snapped);
});
