//! Roster composition configuration.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::state::submission::MIN_ROSTER_SIZE;

/// Default location on disk of the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/roster.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "MATCHDAY_ROSTER_CONFIG_PATH";

/// Errors from parsing a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid roster config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("min_roster_size must be at least 1")]
    ZeroMinimum,
}

/// Settings for the roster workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterConfig {
    /// Players each team needs before submission
    pub min_roster_size: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_roster_size: MIN_ROSTER_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    min_roster_size: Option<usize>,
}

impl RosterConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(contents)?;
        let min_roster_size = raw.min_roster_size.unwrap_or(MIN_ROSTER_SIZE);
        if min_roster_size == 0 {
            return Err(ConfigError::ZeroMinimum);
        }
        Ok(Self { min_roster_size })
    }

    /// Load from disk, falling back to defaults when the file is missing
    /// or invalid.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        min_roster_size = config.min_roster_size,
                        "loaded roster config"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse roster config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "roster config not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read roster config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default() {
        assert_eq!(RosterConfig::default().min_roster_size, 11);
    }

    #[test]
    fn test_from_json() {
        let config = RosterConfig::from_json(r#"{"min_roster_size": 7}"#).unwrap();
        assert_eq!(config.min_roster_size, 7);

        let config = RosterConfig::from_json("{}").unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_rejects_zero() {
        let result = RosterConfig::from_json(r#"{"min_roster_size": 0}"#);
        assert!(matches!(result, Err(ConfigError::ZeroMinimum)));
    }

    // Env var is process-wide, so every path case runs in one test.
    #[test]
    fn test_load_from_env_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let load_from = |name: &str, contents: &str| {
            let path = dir.path().join(name);
            fs::write(&path, contents).unwrap();
            env::set_var(CONFIG_PATH_ENV, &path);
            RosterConfig::load()
        };

        assert_eq!(load_from("good.json", r#"{"min_roster_size": 7}"#).min_roster_size, 7);
        assert_eq!(load_from("bad.json", "{ not json").min_roster_size, 11);
        assert_eq!(load_from("zero.json", r#"{"min_roster_size": 0}"#).min_roster_size, 11);

        env::set_var(CONFIG_PATH_ENV, dir.path().join("missing.json"));
        assert_eq!(RosterConfig::load(), RosterConfig::default());

        // A directory cannot be read as a file
        env::set_var(CONFIG_PATH_ENV, dir.path());
        assert_eq!(RosterConfig::load(), RosterConfig::default());

        env::set_var(CONFIG_PATH_ENV, "");
        assert_eq!(resolve_config_path(), PathBuf::from(DEFAULT_CONFIG_PATH));

        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(resolve_config_path(), PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_rejects_malformed() {
        let result = RosterConfig::from_json("min_roster_size = 5");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
