//! Settings validation.
//!
//! Serde handles syntax; this checks values that only make sense at runtime,
//! like whether the log level is a usable filter directive.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::InspectConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("logging.level must not be empty")]
    EmptyLogLevel,

    #[error("logging.level '{level}' is not a valid filter: {reason}")]
    InvalidLogLevel { level: String, reason: String },
}

/// Check `config`, returning every problem found.
pub fn validate_config(config: &InspectConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.trim();
    if level.is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    } else if let Err(e) = EnvFilter::try_new(level) {
        errors.push(ValidationError::InvalidLogLevel {
            level: level.to_string(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
