//! Tests for building the library client configuration.

use std::time::Duration;

use super::*;

#[test]
fn carries_resolved_values() {
    let toml = toml(
        r#"
        [api]
        key = "sk_test_1"
        base_url = "http://localhost:9000"
        version = "v2"
        timeout = 5

        [webhook]
        tolerance = 10
    "#,
    );

    let config = ValidatedConfig::from_raw(&cli(&["get", "links"]), Some(&toml))
        .unwrap()
        .client_config()
        .unwrap();

    assert_eq!(config.api_key(), "sk_test_1");
    assert_eq!(config.base_url().as_str(), "http://localhost:9000/");
    assert_eq!(config.api_version(), "v2");
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.connect_timeout(), Duration::from_secs(30));
    assert_eq!(config.webhook_tolerance(), 10);
}

#[test]
fn missing_api_key() {
    let config = ValidatedConfig::from_raw(&cli(&["get", "links"]), None).unwrap();

    match config.client_config() {
        Err(ConfigError::MissingRequired { field, .. }) => assert_eq!(field, "api_key"),
        other => panic!("Expected MissingRequired, got {other:?}"),
    }
}

#[test]
fn empty_api_key() {
    let config = ValidatedConfig::from_raw(&cli(&["--api-key", "", "get", "links"]), None).unwrap();

    assert!(matches!(
        config.client_config(),
        Err(ConfigError::InvalidApiKey { .. })
    ));
}
