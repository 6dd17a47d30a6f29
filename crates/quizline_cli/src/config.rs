//! Runtime configuration read from `QUIZLINE_*` environment variables.

use quizline_core::default_log_level;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "quizline.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "quizline-logs";

/// Which record store backs the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// In-process array, discarded on exit.
    Memory,
    /// SQLite file at `Config::db_path`.
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: Backend,
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// Insert the default quizzes when the store is empty.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Sqlite,
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let backend = match value("QUIZLINE_BACKEND") {
            Some(raw) => parse_backend(&raw)?,
            None => defaults.backend,
        };
        let seed = match value("QUIZLINE_SEED") {
            Some(raw) => parse_bool("QUIZLINE_SEED", &raw)?,
            None => defaults.seed,
        };

        Ok(Self {
            backend,
            db_path: value("QUIZLINE_DB_PATH").map_or(defaults.db_path, PathBuf::from),
            log_level: value("QUIZLINE_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: value("QUIZLINE_LOG_DIR").map_or(defaults.log_dir, PathBuf::from),
            seed,
        })
    }
}

fn parse_backend(raw: &str) -> Result<Backend, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "memory" | "array" => Ok(Backend::Memory),
        "sqlite" | "db" => Ok(Backend::Sqlite),
        other => Err(format!(
            "unsupported QUIZLINE_BACKEND `{other}`; expected memory|sqlite"
        )),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("invalid boolean `{other}` for {key}")),
    }
}

#[cfg(test)]
mod tests {
    use super::{Backend, Config};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.backend, Backend::Sqlite);
        assert!(config.seed);
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("QUIZLINE_BACKEND", "Memory"),
            ("QUIZLINE_DB_PATH", "/tmp/q.sqlite3"),
            ("QUIZLINE_LOG_LEVEL", "warn"),
            ("QUIZLINE_LOG_DIR", "/var/log/quizline"),
            ("QUIZLINE_SEED", "no"),
        ])
        .unwrap();

        assert_eq!(config.backend, Backend::Memory);
        assert_eq!(config.db_path, PathBuf::from("/tmp/q.sqlite3"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/quizline"));
        assert!(!config.seed);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("QUIZLINE_BACKEND", "  ")]).unwrap();
        assert_eq!(config.backend, Backend::Sqlite);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let backend_err = config_from(&[("QUIZLINE_BACKEND", "postgres")]).unwrap_err();
        assert!(backend_err.contains("QUIZLINE_BACKEND"));

        let seed_err = config_from(&[("QUIZLINE_SEED", "maybe")]).unwrap_err();
        assert!(seed_err.contains("QUIZLINE_SEED"));
    }
}
