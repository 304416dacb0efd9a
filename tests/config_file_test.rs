//! Config file loading.

use std::io::Write;
use strictly_noughts::{GameConfig, PlayerOverrides, PlayerSetup, Session};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_filter = "debug"

[player_one]
name = "Ada"
marker = "A"

[player_two]
name = "Grace"
marker = "G"
"#
    )
    .unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.player_one(), &PlayerSetup::new("Ada", "A"));
    assert_eq!(config.player_two(), &PlayerSetup::new("Grace", "G"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_duplicate_markers_from_config_are_rejected() {
    let config = GameConfig::default().with_overrides(&PlayerOverrides {
        marker_two: Some("X".to_string()),
        ..Default::default()
    });
    assert!(Session::with_players(config.player_one(), config.player_two()).is_err());
}
