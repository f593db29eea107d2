//! Tests for loading configuration files from disk.

use std::io::Write;

use super::*;
use crate::config::write_default_config;

#[test]
fn load_without_config_file() {
    let config = ValidatedConfig::load(&cli(&["--api-key", "sk_1", "get", "links"])).unwrap();

    assert_eq!(config.api_key.as_deref(), Some("sk_1"));
}

#[test]
fn load_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nkey = \"sk_file\"\nversion = \"v9\"").unwrap();
    let path = file.path().to_str().unwrap();

    let config = ValidatedConfig::load(&cli(&["-c", path, "get", "links"])).unwrap();

    assert_eq!(config.api_key.as_deref(), Some("sk_file"));
    assert_eq!(config.api_version, "v9");
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let result = ValidatedConfig::load(&cli(&["-c", path.to_str().unwrap(), "get", "links"]));

    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}

#[test]
fn load_reports_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[api\nkey =").unwrap();
    let path = file.path().to_str().unwrap();

    let result = ValidatedConfig::load(&cli(&["-c", path, "get", "links"]));

    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn written_template_loads_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paymongo.toml");

    write_default_config(&path).unwrap();
    let config =
        ValidatedConfig::load(&cli(&["-c", path.to_str().unwrap(), "get", "links"])).unwrap();

    assert!(config.api_key.is_none());
    assert_eq!(config.webhook_tolerance, 300);
}

#[test]
fn write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/paymongo.toml");

    let result = write_default_config(&path);

    assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
}

#[test]
fn init_does_not_read_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paymongo.toml");
    let path = path.to_str().unwrap();

    let config = ValidatedConfig::load(&cli(&["-c", path, "init", "-o", path])).unwrap();

    assert!(config.api_key.is_none());
}
