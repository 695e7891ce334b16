//! Integration tests for Settings loading
//!
//! An explicit settings file overrides only what it names; a missing
//! explicit file is a hard error (the global file is merely optional).

use std::fs;

use tempfile::TempDir;

use muninflux::application::ApplicationError;
use muninflux::config::Settings;

#[test]
fn given_explicit_file_when_load_then_overrides_named_fields() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("muninflux.toml");
    fs::write(
        &path,
        r#"
service_user = "telegraf"
schedule_command = "/usr/bin/muninflux fetch"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert: named fields overridden, the rest stays at defaults
    assert_eq!(settings.service_user, "telegraf");
    assert_eq!(settings.program, "munin-influxdb");
    assert_eq!(
        settings.schedule_command.as_deref(),
        Some("/usr/bin/muninflux fetch")
    );
}

#[test]
fn given_empty_file_when_load_then_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("muninflux.toml");
    fs::write(&path, "").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_file_when_load_then_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_malformed_toml_when_load_then_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("muninflux.toml");
    fs::write(&path, "service_user = [not toml").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}
