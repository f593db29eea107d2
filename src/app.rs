//! Application startup and utilities.
//!
//! Exit codes, user-facing hints and tracing setup for the entry point.

use std::process::ExitCode;

use paymongo::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Command succeeded (0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Missing or invalid configuration (1).
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The API call failed or never got a response (2).
    ///
    /// `ExitCode::from` is not `const`, hence a function.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// The webhook delivery must not be trusted (3).
    pub fn verification_failed() -> ExitCode {
        ExitCode::from(3)
    }
}

/// Reports a failed command on stderr and picks its exit code.
pub fn report_failure(error: &RunError) -> ExitCode {
    match error {
        RunError::Config(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(e);
            exit_code::CONFIG_ERROR
        }
        e if e.is_verification_failure() => {
            tracing::error!("{e}");
            exit_code::verification_failed()
        }
        RunError::Api(e) => {
            tracing::error!(code = e.code(), status = ?e.status(), "{e}");
            for api_error in &e.errors() {
                tracing::error!(
                    code = %api_error.code,
                    attribute = api_error.attribute().unwrap_or("-"),
                    "{}",
                    api_error.detail.as_deref().unwrap_or("")
                );
            }
            exit_code::runtime_error()
        }
        e => {
            tracing::error!("Command failed: {e}");
            exit_code::runtime_error()
        }
    }
}

/// Prints a hint for configuration errors the user can fix directly.
pub fn print_config_hint(error: &ConfigError) {
    let hint = match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::API_KEY => {
            "Pass --api-key, or run 'paymongo init' and set api.key in the generated file."
        }
        ConfigError::MissingRequired { field: f, .. } if *f == field::WEBHOOK_SECRET => {
            "Pass --secret with the secret_key of the webhook that sent the delivery."
        }
        ConfigError::FileRead { .. } => {
            "Run 'paymongo init' to generate a configuration template."
        }
        ConfigError::InvalidApiKey { .. } => {
            "Use the secret key (sk_test_... or sk_live_...) from the PayMongo dashboard."
        }
        _ => return,
    };

    eprintln!("\n{hint}");
}

/// Sets up the tracing subscriber.
///
/// Logs go to stderr; stdout carries only command output.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
