//! Settings loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::InspectConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

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

/// Load and validate settings from a TOML file.
pub fn load_config(path: &Path) -> Result<InspectConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate settings from TOML text.
pub fn parse_config(content: &str) -> Result<InspectConfig, ConfigError> {
    let config: InspectConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), InspectConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "warn");

        let config = parse_config("[logging]\nlevel = \"debug\"\nansi = false\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.ansi);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let err = parse_config("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_errors_surface() {
        let err = parse_config("[logging]\nlevel = \"\"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: logging.level must not be empty"
        );
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("authz-inspect.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(load_config(&path).unwrap().output.format, OutputFormat::Json);

        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
