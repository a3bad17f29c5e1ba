//! Offset units: character offsets by default, UTF-16 when the index counts
//! the way JavaScript strings do.

use super::common::{highlighted_texts, make_metadata, make_page};
use hitmark::{Document, ExcerptConfig, Highlighter, Interval, OffsetUnit, RequestedOffsetUnit, Segment};

/// "🦊 quick 🦊 fox": each fox emoji is one char but two UTF-16 units.
const EMOJI_TEXT: &str = "\u{1f98a} quick \u{1f98a} fox";

#[test]
fn test_utf16_offsets_converted_before_rendering() {
    let highlighter = Highlighter::new(ExcerptConfig::new().with_offset_unit(OffsetUnit::Utf16));
    let page = make_page(0, "t", "a", EMOJI_TEXT);
    // UTF-16: 🦊=0..2, ' '=2, quick=3..8, ' '=8, 🦊=9..11, ' '=11, fox=12..15
    let metadata = make_metadata(&[("quick", "content", &[(3, 5)]), ("fox", "content", &[(12, 3)])]);
    let rendered = highlighter.highlight_page("0", 1.0, &page, &metadata);
    assert_eq!(highlighted_texts(&rendered.fields["content"]), vec!["quick", "fox"]);
}

#[test]
fn test_char_offsets_are_the_default() {
    let highlighter = Highlighter::default();
    let page = make_page(0, "t", "a", EMOJI_TEXT);
    // chars: 🦊=0, ' '=1, quick=2..7, ' '=7, 🦊=8, ' '=9, fox=10..13
    let metadata = make_metadata(&[("quick", "content", &[(2, 5)]), ("fox", "content", &[(10, 3)])]);
    let rendered = highlighter.highlight_page("0", 1.0, &page, &metadata);
    assert_eq!(highlighted_texts(&rendered.fields["content"]), vec!["quick", "fox"]);
}

#[test]
fn test_utf16_conversion_can_merge_marks() {
    // two UTF-16 marks that both land inside the same surrogate pair round
    // up to the same character and collapse
    let doc = Document::new(EMOJI_TEXT);
    let a = doc.utf16_interval(Interval::new(1, 8));
    let b = doc.utf16_interval(Interval::new(2, 8));
    assert_eq!(a, b);
    assert_eq!(doc.slice(a), " quick");
}

#[test]
fn test_offsets_past_end_are_clamped() {
    let highlighter = Highlighter::default();
    let page = make_page(0, "fox", "a", "the fox");
    let metadata = make_metadata(&[("fox", "content", &[(4, 50)]), ("fox", "title", &[(90, 3)])]);
    let rendered = highlighter.highlight_page("0", 1.0, &page, &metadata);
    assert_eq!(highlighted_texts(&rendered.fields["content"]), vec!["fox"]);
    assert_eq!(rendered.fields["title"].highlight_count(), 0);
    assert_eq!(rendered.fields["title"].to_plain_text("…"), "fox");
}

/// Configure a highlighter the way the browser binding does: the JSON config
/// as JavaScript would hand it over, UTF-16 unless it names a unit.
fn browser_highlighter(json: &str) -> Highlighter {
    let requested: RequestedOffsetUnit = serde_json::from_str(json).unwrap();
    let config = ExcerptConfig::from_json_str(json).unwrap().with_browser_offsets(requested);
    Highlighter::new(config)
}

#[test]
fn test_browser_config_reads_javascript_string_indices() {
    let highlighter = browser_highlighter(r#"{"contextRadius": 45}"#);
    // JS indices: 😀=0..2, ' '=2, quick=3..8, ' '=8, fox=9..12
    let page = make_page(0, "t", "a", "\u{1f600} quick fox");
    let metadata = make_metadata(&[("quick", "content", &[(3, 5)])]);
    let rendered = highlighter.highlight_page("0", 1.0, &page, &metadata);
    assert_eq!(
        rendered.fields["content"].segments,
        vec![
            Segment::Plain("\u{1f600} ".into()),
            Segment::Highlighted("quick".into()),
            Segment::Plain(" fox".into()),
        ]
    );
}

#[test]
fn test_browser_config_keeps_an_explicit_char_unit() {
    let highlighter = browser_highlighter(r#"{"offsetUnit": "chars"}"#);
    let page = make_page(0, "t", "a", "\u{1f600} quick fox");
    let metadata = make_metadata(&[("quick", "content", &[(2, 5)])]);
    let rendered = highlighter.highlight_page("0", 1.0, &page, &metadata);
    assert_eq!(highlighted_texts(&rendered.fields["content"]), vec!["quick"]);
}
