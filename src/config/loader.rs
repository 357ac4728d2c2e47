//! Configuration loading from the process environment.

use clap::Parser;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing variable, bad value type, `--help` or `--version`.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from environment variables and flags.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::try_parse()?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Same as [`load_config`], reading flags from `args` instead of the
/// process command line. Environment variables still apply.
pub fn load_config_from<I, T>(args: I) -> Result<AppConfig, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let config = AppConfig::try_parse_from(args)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
