//! Settings schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.

use serde::{Deserialize, Serialize};

/// Root settings for the inspection tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct InspectConfig {
    /// Log filter and formatting.
    pub logging: LoggingConfig,

    /// How results are printed.
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (e.g. "authz_inspect=debug").
    pub level: String,

    /// Colorize log output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            ansi: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Console output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns for humans.
    #[default]
    Table,
    /// Pretty-printed JSON for scripts.
    Json,
}
