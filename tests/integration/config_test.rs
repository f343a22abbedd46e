//! Integration tests for loading and saving configuration

use std::fs;

use tempfile::TempDir;

use super::helpers::{demo_cues, MockView};
use cuesync::{Config, ProgressEvent, SyncController};

#[test]
fn missing_file_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_then_load_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.sync.auto_scroll = false;
    config.sync.scroll_offset = 24.0;
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn invalid_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[sync\nauto_scroll = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn loaded_options_drive_the_controller() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[sync]
scroll_container_id = "cues"
cue_element_prefix = "cue-"
scroll_offset = 10.0
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let view = MockView::lyric_list("cues", "cue-", 6);
    let mut controller = SyncController::new(demo_cues(), config.sync);
    controller.attach_view(Box::new(view.clone()));

    controller.on_progress(ProgressEvent::new(46.0));

    assert_eq!(controller.cue_element_id(1), "cue-1");
    assert_eq!(view.scroll_tops(), vec![140.0]);
    assert_eq!(view.scrolls()[0].container, "cues");
}
