//! Configuration management for derbydesk.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::entry::RaceConfig;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "derbydesk";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "derby.db";

/// Scoring methods the race config accepts.
const SCORING_METHODS: &[&str] = &["points", "times"];

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `DERBYDESK_`)
/// 2. TOML config file at `~/.config/derbydesk/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Race-day defaults seeded into the roster database at initialization.
    pub race: RaceConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/derbydesk/derby.db`
    pub database_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `DERBYDESK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("DERBYDESK_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.race.num_lanes == 0 {
            return Err(Error::ConfigValidation {
                message: "num_lanes must be greater than 0".to_string(),
            });
        }

        if self.race.heats_per_scout == 0 {
            return Err(Error::ConfigValidation {
                message: "heats_per_scout must be greater than 0".to_string(),
            });
        }

        if !SCORING_METHODS.contains(&self.race.scoring_method.as_str()) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "unknown scoring_method '{}' (expected one of: {})",
                    self.race.scoring_method,
                    SCORING_METHODS.join(", ")
                ),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.database_path.is_none());
        assert_eq!(config.race, RaceConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_lanes() {
        let mut config = Config::default();
        config.race.num_lanes = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("num_lanes"));
    }

    #[test]
    fn test_validate_zero_heats() {
        let mut config = Config::default();
        config.race.heats_per_scout = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("heats_per_scout"));
    }

    #[test]
    fn test_validate_unknown_scoring_method() {
        let mut config = Config::default();
        config.race.scoring_method = "coin-toss".to_string();

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("scoring_method"));
        assert!(err.contains("coin-toss"));
    }

    #[test]
    fn test_validate_times_scoring_method() {
        let mut config = Config::default();
        config.race.scoring_method = "times".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_path_default() {
        let config = Config::default();
        let path = config.database_path();

        assert!(path.to_string_lossy().contains("derby.db"));
    }

    #[test]
    fn test_database_path_custom() {
        let mut config = Config::default();
        config.storage.database_path = Some(PathBuf::from("/custom/path/db.sqlite"));

        assert_eq!(
            config.database_path(),
            PathBuf::from("/custom/path/db.sqlite")
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("derbydesk"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_data_dir() {
        let path = Config::default_data_dir();
        assert!(path.to_string_lossy().contains("derbydesk"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("database_path"));
        assert!(json.contains("num_lanes"));
    }

    #[test]
    fn test_storage_config_deserialize() {
        let json = r#"{"database_path": "/tmp/derby.db"}"#;
        let storage: StorageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(storage.database_path, Some(PathBuf::from("/tmp/derby.db")));
    }

    #[test]
    fn test_race_config_deserialize_partial() {
        let json = r#"{"num_lanes": 6}"#;
        let race: RaceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(race.num_lanes, 6);
        assert_eq!(race.heats_per_scout, 3);
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
