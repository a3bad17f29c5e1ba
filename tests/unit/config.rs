//! Config loading from disk and validation.

use hitmark::config::MAX_CONTEXT_RADIUS;
use hitmark::{ConfigError, ExcerptConfig, OffsetUnit, ScriptHint};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"{
            "contextRadius": 30,
            "maxMarksPerResult": 4,
            "fallbackExcerptLength": 80,
            "maxResults": 10,
            "snapToWords": false,
            "supportedScripts": ["han", "thai", "han"],
            "searchFields": ["title", "content", "tags"],
            "excerptFields": ["content", "tags"],
            "offsetUnit": "utf16"
        }"#,
    );
    let config = ExcerptConfig::load(file.path()).unwrap();
    assert_eq!(config.context_radius, 30);
    assert_eq!(config.max_marks(), Some(4));
    assert_eq!(config.fallback_excerpt_length, 80);
    assert_eq!(config.result_limit(), Some(10));
    assert!(!config.snap_to_words);
    assert_eq!(config.search_fields, vec!["title", "content", "tags"]);
    assert!(config.is_excerpt_field("tags"));
    assert_eq!(config.offset_unit, OffsetUnit::Utf16);
    // duplicate hints collapse in the compiled set
    assert_eq!(config.script_set().hints(), &[ScriptHint::Han, ScriptHint::Thai]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = ExcerptConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_load_rejects_invalid_values() {
    let file = write_config(r#"{"searchFields": [""]}"#);
    let err = ExcerptConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("searchFields"));
}

#[test]
fn test_unknown_script_is_a_json_error() {
    let err = ExcerptConfig::from_json_str(r#"{"supportedScripts": ["klingon"]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_radius_limit_is_inclusive() {
    assert!(ExcerptConfig::new().with_context_radius(MAX_CONTEXT_RADIUS).validate().is_ok());
    assert!(ExcerptConfig::new()
        .with_context_radius(MAX_CONTEXT_RADIUS + 1)
        .validate()
        .is_err());
}

#[test]
fn test_config_round_trips_through_json() {
    let config = ExcerptConfig::new()
        .with_context_radius(12)
        .with_supported_scripts(&[ScriptHint::Khmer]);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"contextRadius\":12"));
    assert!(json.contains("\"supportedScripts\":[\"khmer\"]"));
    assert_eq!(ExcerptConfig::from_json_str(&json).unwrap(), config);
}
