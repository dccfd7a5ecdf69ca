//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use study_hub::config::{Config, ConfigOverrides};
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(
        config.paths.data_file.is_empty(),
        "No data file by default; the built-in sample is used"
    );
    assert_eq!(config.dashboard.upcoming_assignments, 3);
    assert_eq!(config.dashboard.recent_notes, 6);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_file = "/home/me/planner.toml"
reports_dir = "./reports"

[dashboard]
upcoming_assignments = 5
recent_notes = 4
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "/home/me/planner.toml");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.dashboard.upcoming_assignments, 5);
    assert_eq!(config.dashboard.recent_notes, 4);
}

#[test]
fn test_config_from_toml_partial() {
    // Test that missing fields and sections use defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.paths.data_file, "");
    assert_eq!(config.dashboard.recent_notes, 0);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$STUDY_HUB/studyhub.log"

[paths]
data_file = "$STUDY_HUB/planner.toml"
reports_dir = "$STUDY_HUB/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("studyhub"));
    assert!(!config.logging.file.contains("$STUDY_HUB"));
    assert!(config.paths.data_file.ends_with("planner.toml"));
    assert!(!config.paths.data_file.contains("$STUDY_HUB"));
    assert!(!config.paths.reports_dir.contains("$STUDY_HUB"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("upcoming_assignments", "5")
        .expect("Failed to set upcoming_assignments");
    assert_eq!(config.dashboard.upcoming_assignments, 5);

    config
        .set("data_file", "/tmp/planner.toml")
        .expect("Failed to set data_file");
    assert_eq!(config.get("data_file").unwrap(), "/tmp/planner.toml");

    // Test unknown key
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("recent_notes", "0").is_err());
    assert!(config.set("upcoming_assignments", "three").is_err());

    // Failed sets leave the value untouched
    assert_eq!(config.dashboard.recent_notes, 6);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    // Change a value
    config.set("level", "debug").expect("Failed to set level");
    config.set("recent_notes", "2").expect("Failed to set recent_notes");
    assert_eq!(config.logging.level, "debug");

    // Unset should restore default
    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("recent_notes", &defaults)
        .expect("Failed to unset recent_notes");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.dashboard.recent_notes, defaults.dashboard.recent_notes);

    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    // Create and save a config
    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("upcoming_assignments", "4")
        .expect("Failed to set upcoming_assignments");

    // Manually save to our test location
    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    // Load and verify
    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.dashboard.upcoming_assignments, 4);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_file: Some("./planner.toml".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "./planner.toml");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let reports_dir = config.paths.reports_dir.clone();

    // Apply partial overrides - only level changes
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, reports_dir);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    // Should contain section headers (lowercase)
    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[dashboard]"));

    // Should contain field names
    assert!(display_str.contains("level"));
    assert!(display_str.contains("data_file"));
    assert!(display_str.contains("recent_notes"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    // Create a minimal config with empty fields
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
data_file = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    // Merge should add missing fields from defaults
    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(
        config.dashboard.upcoming_assignments,
        defaults.dashboard.upcoming_assignments
    );
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
data_file = "/my/planner.toml"
reports_dir = ""

[dashboard]
recent_notes = 2
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    // Custom values should be preserved
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.data_file, "/my/planner.toml");
    assert_eq!(config.dashboard.recent_notes, 2);
}

#[test]
fn test_merge_defaults_no_change_on_full_config() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_get_studyhub_dir() {
    let dir = Config::get_studyhub_dir();

    // Should contain "studyhub" in the path
    assert!(dir.to_string_lossy().contains("studyhub"));

    // Should not be empty or just "."
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    // Should end with config.toml or dconfig.toml
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
