//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, first-start initialization, and persistence.

use std::fs;
use std::path::PathBuf;

use tabstash::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tabstash::types::errors::SettingsError;
use tabstash::types::settings::StashSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(settings_path(dir)))
}

fn settings_path(dir: &TempDir) -> String {
    dir.path()
        .join("settings.json")
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, StashSettings::default());
    assert_eq!(settings.toolbar_identifier, "toolbar");
    assert_eq!(settings.log_level, "info");
}

#[test]
fn test_saved_settings_are_loaded_by_new_engine() {
    let dir = TempDir::new().unwrap();
    fs::write(
        settings_path(&dir),
        r#"{"extension_origin": "safari-extension://dev", "base_uri": "safari-extension://dev/", "toolbar_identifier": "stash", "log_level": "debug"}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.save().unwrap();

    let mut reloaded = engine_in_temp(&dir);
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.extension_origin, "safari-extension://dev");
    assert_eq!(settings.base_uri, "safari-extension://dev/");
    assert_eq!(settings.toolbar_identifier, "stash");
    assert_eq!(settings.log_level, "debug");
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), r#"{"log_level": "trace"}"#).unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();

    assert_eq!(settings.log_level, "trace");
    assert_eq!(settings.extension_origin, StashSettings::default().extension_origin);
    assert_eq!(settings.database_path, None);
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::Serialization(_))));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.save().unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_or_init_writes_defaults_on_first_start() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load_or_init().unwrap().clone();
    assert_eq!(settings, StashSettings::default());

    let written = fs::read_to_string(settings_path(&dir)).unwrap();
    let parsed: StashSettings = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, StashSettings::default());
}

#[test]
fn test_load_or_init_leaves_existing_file_alone() {
    let dir = TempDir::new().unwrap();
    let original = r#"{"toolbar_identifier": "custom"}"#;
    fs::write(settings_path(&dir), original).unwrap();

    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load_or_init().unwrap().toolbar_identifier, "custom");
    assert_eq!(engine.get_settings().toolbar_identifier, "custom");
    assert_eq!(fs::read_to_string(settings_path(&dir)).unwrap(), original);
}

#[test]
fn test_load_or_init_does_not_overwrite_malformed_file() {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.load_or_init(),
        Err(SettingsError::Serialization(_))
    ));
    assert_eq!(fs::read_to_string(settings_path(&dir)).unwrap(), "{ not json");
}

#[test]
fn test_database_path_override() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("custom.db");
    fs::write(
        settings_path(&dir),
        serde_json::json!({"database_path": db.to_string_lossy()}).to_string(),
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    assert_eq!(engine.database_path(), PathBuf::from(&db));
}
