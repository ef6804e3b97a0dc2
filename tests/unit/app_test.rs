//! Tests for the App startup sequence and NDJSON line handling.

use std::fs;

use tabstash::app::App;
use tabstash::browser::HostBridge;
use tabstash::managers::stash_manager::{StashManager, StashManagerTrait};
use tempfile::TempDir;

/// Writes a settings file pointing the database into `dir` and returns its path.
fn settings_in(dir: &TempDir) -> String {
    let settings = dir.path().join("settings.json");
    let db = dir.path().join("data").join("tabstash.db");
    fs::write(
        &settings,
        serde_json::json!({"database_path": db.to_string_lossy(), "log_level": "warn"}).to_string(),
    )
    .unwrap();
    settings.to_string_lossy().to_string()
}

fn start(config: &str) -> App<HostBridge<Vec<u8>>> {
    App::new(Some(config.to_string()), HostBridge::new(Vec::new())).unwrap()
}

const STASH_LINE: &str = r#"{"event":"command","command":"stash-all-tabs","window":{"id":"w1","tabs":[{"title":"A","url":"https://a.com"}]}}"#;

#[test]
fn test_startup_creates_database_in_configured_dir() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);

    let app = start(&config);

    assert!(dir.path().join("data").join("tabstash.db").exists());
    assert_eq!(app.dispatcher.settings().log_level, "warn");
}

#[test]
fn test_handle_line_dispatches_event() {
    let dir = TempDir::new().unwrap();
    let mut app = start(&settings_in(&dir));

    app.handle_line(STASH_LINE).unwrap();

    let stashes = StashManager::new(app.dispatcher.store())
        .get_all_stashes()
        .unwrap();
    assert_eq!(stashes.len(), 1);
    assert_eq!(stashes[0].tabs[0].url, "https://a.com");
}

#[test]
fn test_blank_line_is_ignored() {
    let dir = TempDir::new().unwrap();
    let mut app = start(&settings_in(&dir));
    assert!(app.handle_line("   ").is_ok());
}

#[test]
fn test_bad_line_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let mut app = start(&settings_in(&dir));

    let err = app.handle_line(r#"{"event":"explode"}"#).unwrap_err();
    assert!(err.starts_with("parse error"), "got: {}", err);

    let err = app.handle_line("not json").unwrap_err();
    assert!(err.starts_with("parse error"), "got: {}", err);
}

#[test]
fn test_stashes_survive_restart() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);

    {
        let mut app = start(&config);
        app.handle_line(STASH_LINE).unwrap();
    }

    let app = start(&config);
    let ids = StashManager::new(app.dispatcher.store())
        .get_all_stash_ids()
        .unwrap();
    assert_eq!(ids.len(), 1);
}
