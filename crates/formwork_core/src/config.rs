//! Runtime configuration for embedding hosts.
//!
//! # Responsibility
//! - Resolve logging and session settings from defaults plus environment.
//!
//! # Invariants
//! - `log_level` is always a normalized level string.
//! - `log_dir`, when set, is absolute.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "FORMWORK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FORMWORK_LOG_DIR";
pub const ENV_ORGANISM_PREFIX: &str = "FORMWORK_ORGANISM_PREFIX";

const DEFAULT_ORGANISM_PREFIX: &str = "organism";

/// Errors from configuration resolution.
#[derive(Debug)]
pub enum ConfigError {
    /// A variable held a value the corresponding setting rejects.
    InvalidVar {
        name: &'static str,
        source: LoggingError,
    },
    /// Organism prefix contains the id delimiter.
    InvalidOrganismPrefix(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVar { name, source } => write!(f, "invalid {name}: {source}"),
            Self::InvalidOrganismPrefix(prefix) => {
                write!(f, "invalid organism prefix `{prefix}`")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidVar { source, .. } => Some(source),
            Self::InvalidOrganismPrefix(_) => None,
        }
    }
}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// Rolling log directory; logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    /// Prefix of generated organism ids (`<prefix>-<uuid>`).
    pub organism_prefix: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            organism_prefix: DEFAULT_ORGANISM_PREFIX.to_string(),
        }
    }
}

impl CoreConfig {
    /// Defaults overridden by `FORMWORK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns per variable name.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(|source| ConfigError::InvalidVar {
                name: ENV_LOG_LEVEL,
                source,
            })?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let dir = normalize_log_dir(Path::new(&dir)).map_err(|source| {
                ConfigError::InvalidVar {
                    name: ENV_LOG_DIR,
                    source,
                }
            })?;
            config.log_dir = Some(dir);
        }

        if let Some(prefix) = read(ENV_ORGANISM_PREFIX) {
            if prefix.contains(crate::model::id::ID_DELIMITER) {
                return Err(ConfigError::InvalidOrganismPrefix(prefix));
            }
            config.organism_prefix = prefix;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_ORGANISM_PREFIX};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = CoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.organism_prefix, "organism");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn overrides_are_normalized() {
        let dir = std::env::temp_dir();
        let dir_str = dir.to_str().expect("temp dir should be UTF-8");
        let config = CoreConfig::from_lookup(lookup(&[
            (ENV_LOG_LEVEL, " Warning "),
            (ENV_LOG_DIR, dir_str),
            (ENV_ORGANISM_PREFIX, "survey"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some(dir.as_path()));
        assert_eq!(config.organism_prefix, "survey");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = CoreConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "  ")])).unwrap();
        assert_eq!(config.log_level, CoreConfig::default().log_level);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = CoreConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name, .. } if name == ENV_LOG_LEVEL));

        let err = CoreConfig::from_lookup(lookup(&[(ENV_LOG_DIR, "relative/logs")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LOG_DIR));

        let err = CoreConfig::from_lookup(lookup(&[(ENV_ORGANISM_PREFIX, "a|b")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrganismPrefix(_)));
    }
}
