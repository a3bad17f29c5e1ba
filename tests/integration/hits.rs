//! Result lists: ordering, caps, unknown references, and the JSON shapes the
//! front end exchanges.

use super::common::{highlighted_texts, make_hit, make_metadata, sample_pages};
use hitmark::{ExcerptConfig, Highlighter, Page, SearchHit};

fn hits() -> Vec<SearchHit> {
    vec![
        make_hit(1, 3.5, make_metadata(&[("search", "title", &[(0, 6)])])),
        make_hit(0, 2.0, make_metadata(&[("quick", "content", &[(4, 5)])])),
        make_hit(2, 1.0, make_metadata(&[("\u{6771}\u{4eac}", "content", &[(3, 2)])])),
    ]
}

#[test]
fn test_hits_rendered_in_order() {
    let list = Highlighter::default().highlight_hits(&sample_pages(), &hits());
    assert_eq!(list.total, 3);
    let refs: Vec<&str> = list.pages.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(refs, vec!["1", "0", "2"]);
    assert_eq!(highlighted_texts(&list.pages[0].fields["title"]), vec!["Search"]);
    assert_eq!(highlighted_texts(&list.pages[1].fields["content"]), vec!["quick"]);
    assert_eq!(
        highlighted_texts(&list.pages[2].fields["content"]),
        vec!["\u{6771}\u{4eac}"]
    );
}

#[test]
fn test_max_results_caps_rendering_not_total() {
    let highlighter = Highlighter::new(ExcerptConfig::new().with_max_results(2));
    let list = highlighter.highlight_hits(&sample_pages(), &hits());
    assert_eq!(list.total, 3);
    assert_eq!(list.pages.len(), 2);
}

#[test]
fn test_unknown_references_skipped() {
    let mut hits = hits();
    hits.insert(0, make_hit(99, 9.0, Default::default()));
    hits[2].reference = "not-a-number".into();
    let list = Highlighter::default().highlight_hits(&sample_pages(), &hits);
    assert_eq!(list.total, 4);
    let refs: Vec<&str> = list.pages.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(refs, vec!["1", "2"]);
}

#[test]
fn test_no_hits() {
    let list = Highlighter::default().highlight_hits(&sample_pages(), &[]);
    assert_eq!(list.total, 0);
    assert!(list.pages.is_empty());
}

#[test]
fn test_front_end_json_shapes() {
    let pages: Vec<Page> = serde_json::from_str(
        r#"[
            {"title": "Quick Start", "author": "Ada", "content": "The quick brown fox jumps",
             "href": "/quick/", "date": "2024-01-02", "tags": ["intro"]}
        ]"#,
    )
    .unwrap();
    let hits: Vec<SearchHit> = serde_json::from_str(
        r#"[
            {"ref": "0", "score": 1.25,
             "matchData": {"metadata": {"quick": {"content": {"position": [[4, 5]]},
                                                  "title":   {"position": [[0, 5]]}}}}}
        ]"#,
    )
    .unwrap();

    let highlighter = Highlighter::new(ExcerptConfig::new().with_context_radius(6));
    let list = highlighter.highlight_hits(&pages, &hits);
    let json = serde_json::to_value(&list).unwrap();

    assert_eq!(json["total"], 1);
    let page = &json["pages"][0];
    assert_eq!(page["ref"], "0");
    assert_eq!(page["href"], "/quick/");
    assert_eq!(page["date"], "2024-01-02");
    assert_eq!(
        page["fields"]["content"],
        serde_json::json!([
            {"kind": "plain", "text": "The "},
            {"kind": "highlighted", "text": "quick"},
            {"kind": "plain", "text": " brown"},
            {"kind": "ellipsis"}
        ])
    );
    assert_eq!(
        page["fields"]["title"],
        serde_json::json!([
            {"kind": "highlighted", "text": "Quick"},
            {"kind": "plain", "text": " Start"}
        ])
    );
}
