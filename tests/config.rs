//! Configuration system tests
//!
//! Tests for config paths and editor config persistence.

use tabstop::config::EditorConfig;
use tabstop::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("tabstop"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_data_paths_live_under_config_dir() {
    let dir = config_paths::config_dir().unwrap();
    assert!(config_paths::snippets_dir().unwrap().starts_with(&dir));
    assert!(config_paths::vocabulary_file().unwrap().starts_with(&dir));
    assert!(config_paths::logs_dir().unwrap().starts_with(&dir));
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert!(config.word_completion);
    assert_eq!(config.completion_min_prefix, 1);
    assert!(config.snippets_dir.is_none());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let config: EditorConfig = serde_yaml::from_str("completion_min_prefix: 3\n").unwrap();
    assert_eq!(config.completion_min_prefix, 3);
    assert!(config.word_completion);
    assert!(config.vocabulary_file.is_none());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        snippets_dir: Some(dir.path().join("snips")),
        word_completion: false,
        ..EditorConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_invalid_yaml_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "word_completion: [not a bool\n").unwrap();
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_explicit_paths_win_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig {
        vocabulary_file: Some(dir.path().join("words.yaml")),
        ..EditorConfig::default()
    };
    assert_eq!(
        config.resolved_vocabulary_file(),
        Some(dir.path().join("words.yaml"))
    );
    assert_eq!(
        EditorConfig::default().resolved_snippets_dir(),
        config_paths::snippets_dir()
    );
}
