use super::*;

use tempfile::tempdir;

#[test]
fn test_read_settings_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, r#"{ "suggestions": false, "slow_warn_ms": 250 }"#).unwrap();

    let settings = read_settings(&path).unwrap();
    assert_eq!(settings.suggestions, Some(false));
    assert_eq!(settings.slow_warn_ms, Some(250));
}

#[test]
fn test_read_settings_partial_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, r#"{ "suggestions": true }"#).unwrap();

    let settings = read_settings(&path).unwrap();
    assert_eq!(settings.suggestions, Some(true));
    assert_eq!(settings.slow_warn_ms, None);
}

#[test]
fn test_read_settings_missing_file() {
    let dir = tempdir().unwrap();
    assert!(read_settings(&dir.path().join("absent.json")).is_none());
}

#[test]
fn test_read_settings_corrupt_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, "not json at all").unwrap();

    assert!(read_settings(&path).is_none());
}

#[test]
fn test_default_settings_serialize_empty() {
    let json = serde_json::to_string(&ConsoleSettings::default()).unwrap();
    assert_eq!(json, "{}");
}
