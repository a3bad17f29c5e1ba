// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accent- and case-insensitive text normalization.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// This lets an ASCII query match accented text and vice versa:
/// - "Café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "  naïve   résumé " → "naive resume"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFD normalize (decompose characters into base + combining marks)
/// 3. Drop combining marks
/// 4. Collapse whitespace runs to single spaces and trim
///
/// Lowercasing first means the result is already decomposed and mark-free, so
/// normalizing twice gives the same string as normalizing once.
pub fn normalize(value: &str) -> String {
    strip_diacritics(&value.to_lowercase())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// NFD-decompose and drop diacritical marks, leaving case and spacing alone.
pub fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_diacritical_mark(*c)).collect()
}

/// Check if a character is a combining diacritical mark.
///
/// Only the diacritic blocks are stripped. Marks that carry meaning in their
/// script (Japanese voicing marks, Indic vowel signs) stay, otherwise "ガ"
/// would normalize to "カ".
fn is_diacritical_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
