//! Tests for CLI vs TOML vs default precedence rules.

use std::time::Duration;

use super::*;

mod defaults {
    use super::*;

    #[test]
    fn no_config_uses_builtin_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&["get", "payments"]), None).unwrap();

        assert!(config.api_key.is_none());
        assert_eq!(config.base_url.as_str(), "https://api.paymongo.com/");
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.webhook_secret.is_none());
        assert_eq!(config.webhook_tolerance, 300);
        assert!(!config.verbose);
    }

    #[test]
    fn empty_toml_uses_builtin_defaults() {
        let toml = toml("");

        let config = ValidatedConfig::from_raw(&cli(&["get", "payments"]), Some(&toml)).unwrap();

        assert_eq!(config.api_version, "v1");
        assert_eq!(config.webhook_tolerance, 300);
    }
}

mod cli_precedence {
    use super::*;

    #[test]
    fn cli_api_key_overrides_toml() {
        let cli = cli(&["--api-key", "sk_cli", "get", "payments"]);
        let toml = toml(
            r#"
            [api]
            key = "sk_toml"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("sk_cli"));
    }

    #[test]
    fn cli_base_url_overrides_toml() {
        let cli = cli(&["--base-url", "http://cli.example.com", "get", "payments"]);
        let toml = toml(
            r#"
            [api]
            base_url = "http://toml.example.com"
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.base_url.as_str(), "http://cli.example.com/");
    }

    #[test]
    fn verbose_comes_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["-v", "get", "links"]), None).unwrap();

        assert!(config.verbose);
    }
}

mod toml_fallback {
    use super::*;

    #[test]
    fn toml_values_fill_unset_cli_options() {
        let toml = toml(
            r#"
            [api]
            key = "sk_toml"
            base_url = "http://toml.example.com/prefix/"
            version = "v2"
            connect_timeout = 3
            timeout = 9
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&["get", "links"]), Some(&toml)).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("sk_toml"));
        assert_eq!(config.base_url.as_str(), "http://toml.example.com/prefix/");
        assert_eq!(config.api_version, "v2");
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.request_timeout, Duration::from_secs(9));
    }
}

mod validation {
    use super::*;

    #[test]
    fn unparseable_base_url_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--base-url", "not a url", "get", "links"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_base_url_is_rejected() {
        let result = ValidatedConfig::from_raw(
            &cli(&["--base-url", "mailto:ops@example.com", "get", "links"]),
            None,
        );

        match result {
            Err(ConfigError::InvalidUrl { reason, .. }) => {
                assert_eq!(reason, "cannot be used as a base URL");
            }
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn zero_connect_timeout_is_rejected() {
        let toml = toml("[api]\nconnect_timeout = 0");

        let result = ValidatedConfig::from_raw(&cli(&["get", "links"]), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "connect_timeout",
                ..
            })
        ));
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        let toml = toml("[api]\ntimeout = 0");

        let result = ValidatedConfig::from_raw(&cli(&["get", "links"]), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }

    #[test]
    fn missing_api_key_is_not_an_error_yet() {
        let config = ValidatedConfig::from_raw(&cli(&["get", "links"]), None);

        assert!(config.is_ok());
    }
}

mod display {
    use super::*;

    #[test]
    fn secrets_are_not_printed() {
        let config = ValidatedConfig::from_raw(
            &cli(&[
                "--api-key",
                "sk_live_hidden",
                "verify",
                "--payload",
                "p",
                "--signature",
                "s",
                "--secret",
                "whsk_hidden",
            ]),
            None,
        )
        .unwrap();

        for rendered in [config.to_string(), format!("{config:?}")] {
            assert!(!rendered.contains("sk_live_hidden"), "{rendered}");
            assert!(!rendered.contains("whsk_hidden"), "{rendered}");
        }
        assert!(config.to_string().contains("api_key: set"));
        assert!(config.to_string().contains("webhook_secret: set"));
    }
}
