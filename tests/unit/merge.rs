//! Interval merging and match collection.

use super::common::{intervals, make_metadata};
use hitmark::{collect_field_matches, merge_intervals, Interval, TermPosition};

#[test]
fn test_empty_and_single() {
    assert!(merge_intervals(Vec::new()).is_empty());
    assert_eq!(merge_intervals(intervals(&[(3, 7)])), intervals(&[(3, 7)]));
}

#[test]
fn test_unsorted_overlapping_input() {
    let merged = merge_intervals(intervals(&[(20, 25), (5, 8), (0, 3), (2, 4)]));
    assert_eq!(merged, intervals(&[(0, 4), (5, 8), (20, 25)]));
}

#[test]
fn test_nested_collapses_into_outer() {
    let merged = merge_intervals(intervals(&[(2, 3), (0, 10), (4, 9)]));
    assert_eq!(merged, intervals(&[(0, 10)]));
}

#[test]
fn test_touching_intervals_merge() {
    assert_eq!(merge_intervals(intervals(&[(3, 5), (0, 3)])), intervals(&[(0, 5)]));
    // one apart stays split
    assert_eq!(
        merge_intervals(intervals(&[(0, 3), (4, 5)])),
        intervals(&[(0, 3), (4, 5)])
    );
}

#[test]
fn test_zero_length_dropped() {
    assert_eq!(merge_intervals(intervals(&[(4, 4), (1, 2)])), intervals(&[(1, 2)]));
    assert!(merge_intervals(intervals(&[(4, 4)])).is_empty());
}

#[test]
fn test_duplicates_collapse() {
    let merged = merge_intervals(intervals(&[(4, 9), (4, 9), (4, 9)]));
    assert_eq!(merged, intervals(&[(4, 9)]));
}

#[test]
fn test_term_position_converts_offset_length() {
    assert_eq!(TermPosition(4, 5).to_interval(), Interval::new(4, 9));
    assert_eq!(TermPosition(usize::MAX, 2).to_interval().end, usize::MAX);
}

#[test]
fn test_collect_merges_across_terms() {
    // "quick" and a prefix query "qui" both hit the same word
    let metadata = make_metadata(&[
        ("quick", "content", &[(4, 5)]),
        ("qui", "content", &[(4, 3)]),
        ("fox", "content", &[(16, 3)]),
        ("fox", "title", &[(0, 3)]),
    ]);
    let matches = collect_field_matches(&metadata);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches["content"], intervals(&[(4, 9), (16, 19)]));
    assert_eq!(matches["title"], intervals(&[(0, 3)]));
}

#[test]
fn test_collect_omits_fields_without_positions() {
    let metadata = make_metadata(&[
        ("quick", "content", &[(4, 5)]),
        ("quick", "author", &[]),
        ("quick", "title", &[(2, 0)]),
    ]);
    let matches = collect_field_matches(&metadata);
    assert_eq!(matches.keys().collect::<Vec<_>>(), vec!["content"]);
}

#[test]
fn test_metadata_deserializes_lunr_shape() {
    let json = r#"{
        "quick": { "content": { "position": [[4, 5], [30, 5]] } },
        "fox":   { "title":   { "position": [[0, 3]] } }
    }"#;
    let metadata: hitmark::MatchMetadata = serde_json::from_str(json).unwrap();
    let matches = collect_field_matches(&metadata);
    assert_eq!(matches["content"], intervals(&[(4, 9), (30, 35)]));
    assert_eq!(matches["title"], intervals(&[(0, 3)]));
}
