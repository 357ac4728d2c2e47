//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (clap handles presence and types)
//! - Check the panel URL is an absolute http(s) URL
//! - Reject empty credentials and malformed server identifiers
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before anything binds or connects

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("PT_API '{value}' is not a valid URL: {reason}")]
    InvalidApiUrl { value: String, reason: String },

    #[error("PT_API must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("PT_SERVER_ID '{0}' must be a single path segment")]
    InvalidServerId(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let panel = &config.panel;

    if panel.api_url.trim().is_empty() {
        errors.push(ValidationError::Empty("PT_API"));
    } else {
        match Url::parse(&panel.api_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string())),
            Err(e) => errors.push(ValidationError::InvalidApiUrl {
                value: panel.api_url.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if panel.server_id.trim().is_empty() {
        errors.push(ValidationError::Empty("PT_SERVER_ID"));
    } else if panel.server_id.contains(['/', '?', '#']) {
        errors.push(ValidationError::InvalidServerId(panel.server_id.clone()));
    }

    if panel.api_key.trim().is_empty() {
        errors.push(ValidationError::Empty("PT_API_KEY"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
