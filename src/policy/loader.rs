//! Loading policy configs from disk and grouping them by type.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::policy::model::{PolicyConfig, PolicyTypeToConfigs, TypedConfig};
use crate::policy::parser::{ConfigParser, ParseError, YamlConfigParser};

/// Error type for policy loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// The file that caused the failure.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::FileRead { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Load every file with the default YAML parser.
pub fn get_configs_from_files<P: AsRef<Path>>(
    paths: &[P],
) -> Result<PolicyTypeToConfigs<PolicyConfig>, LoadError> {
    get_configs_from_files_with(&YamlConfigParser::default(), paths)
}

/// Load every file with `parser`, grouping configs by their policy type.
///
/// Stops at the first file that cannot be read or parsed; configs from
/// earlier files are discarded in that case.
pub fn get_configs_from_files_with<T, P>(
    parser: &T,
    paths: &[P],
) -> Result<PolicyTypeToConfigs<T::Config>, LoadError>
where
    T: ConfigParser,
    P: AsRef<Path>,
{
    let mut policy_type_to_configs: PolicyTypeToConfigs<T::Config> = HashMap::new();

    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = parser.parse(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            configs = parsed.configs.len(),
            skipped = parsed.others.len(),
            "Parsed policy file"
        );
        for other in &parsed.others {
            tracing::warn!(
                path = %path.display(),
                kind = %other.kind,
                api_version = %other.api_version,
                name = %other.name,
                "Skipping object of unknown kind"
            );
        }

        for config in parsed.configs {
            policy_type_to_configs
                .entry(config.config_type().to_string())
                .or_insert_with(Vec::new)
                .push(config);
        }
    }

    Ok(policy_type_to_configs)
}
