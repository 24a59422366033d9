//! Tests for the Concord configuration system.

use std::sync::Mutex;

use concord_core::config::{ConcordConfig, ConfigOverrides, MissingObjectPolicy};
use concord_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CONCORD_ env vars to prevent cross-test contamination.
fn clear_concord_env_vars() {
    for key in [
        "CONCORD_STRICT_DUPLICATES",
        "CONCORD_MISSING_OBJECTS",
        "CONCORD_MAX_OBJECTS",
        "CONCORD_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_concord_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("concord.toml"),
        r#"
[consensus]
strict_duplicates = false
missing_objects = "prepend_tied"
max_objects = 100

[logging]
level = "debug"
"#,
    )
    .unwrap();

    std::env::set_var("CONCORD_MAX_OBJECTS", "250");

    let overrides = ConfigOverrides {
        missing_objects: Some(MissingObjectPolicy::Reject),
        ..Default::default()
    };

    let config = ConcordConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Overrides beat env and project.
    assert_eq!(config.consensus.missing_objects, Some(MissingObjectPolicy::Reject));
    // Env beats project.
    assert_eq!(config.consensus.max_objects, Some(250));
    // Project beats defaults.
    assert_eq!(config.consensus.strict_duplicates, Some(false));
    assert_eq!(config.logging.effective_level(), "debug");

    clear_concord_env_vars();
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_concord_env_vars();

    let dir = tempdir();
    let config = ConcordConfig::load(dir.path(), None).unwrap();

    assert!(config.consensus.effective_strict_duplicates());
    assert_eq!(
        config.consensus.effective_missing_objects(),
        MissingObjectPolicy::AppendTied
    );
    assert_eq!(config.consensus.effective_max_objects(), 4_096);
    assert_eq!(config.logging.effective_level(), "info");
    assert!(!config.logging.effective_json());
}

#[test]
fn test_invalid_toml_reports_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_concord_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("concord.toml"), "[consensus\nmax_objects = ").unwrap();

    match ConcordConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { path, .. }) => assert!(path.ends_with("concord.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_invalid_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_concord_env_vars();

    std::env::set_var("CONCORD_MISSING_OBJECTS", "shuffle");
    let dir = tempdir();
    let result = ConcordConfig::load(dir.path(), None);
    assert!(matches!(result, Err(ConfigError::InvalidValue { ref field, .. }) if field == "CONCORD_MISSING_OBJECTS"));

    clear_concord_env_vars();
}

#[test]
fn test_validation_rejects_zero_max_objects() {
    let result = ConcordConfig::from_toml("[consensus]\nmax_objects = 0\n");
    assert!(matches!(
        result,
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "consensus.max_objects"
    ));
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let result = ConcordConfig::from_toml("[logging]\nlevel = \"loud\"\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = ConcordConfig::from_toml("[consensus]\nfuture_knob = 3\nmax_objects = 9\n").unwrap();
    assert_eq!(config.consensus.max_objects, Some(9));
}

#[test]
fn test_toml_round_trip_preserves_policy() {
    let config = ConcordConfig::from_toml("[consensus]\nmissing_objects = \"reject\"\n").unwrap();
    let text = config.to_toml().unwrap();
    assert!(text.contains("missing_objects = \"reject\""));
    let reparsed = ConcordConfig::from_toml(&text).unwrap();
    assert_eq!(reparsed.consensus.missing_objects, Some(MissingObjectPolicy::Reject));
}
