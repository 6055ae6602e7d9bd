use super::*;
use crate::shortcuts::Platform;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.platform, None);
    assert_eq!(config.overrides_path, None);
    assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_default_platform_is_host() {
    assert_eq!(Config::default().get_platform(), Platform::current());
}

#[test]
fn test_explicit_platform_wins() {
    let config = Config {
        platform: Some(Platform::Mac),
        ..Config::default()
    };
    assert_eq!(config.get_platform(), Platform::Mac);
}

#[test]
fn test_default_overrides_path() {
    let path = Config::default().get_overrides_path();
    let expected = PathBuf::from(APP_DIR_NAME).join(OVERRIDES_FILE_NAME);
    assert!(path.ends_with(expected));
}

#[test]
fn test_config_deserialization_camel_case() {
    let config: Config = serde_json::from_str(
        r#"{"platform":"linux","overridesPath":"/tmp/keys.json","logLevel":"debug"}"#,
    )
    .unwrap();

    assert_eq!(config.platform, Some(Platform::Linux));
    let expected = PathBuf::from("/tmp/keys.json");
    assert_eq!(config.overrides_path, Some(expected));
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_missing_fields_use_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_serialization_skips_unset() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert_eq!(json, r#"{"logLevel":"info"}"#);
}

#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_valid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"platform":"win"}"#).unwrap();

    let config = load_config_from(&path);
    assert_eq!(config.platform, Some(Platform::Win));
}

#[test]
fn test_load_invalid_file_returns_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"platform":"amiga"}"#).unwrap();

    assert_eq!(load_config_from(&path), Config::default());
}
