//! Configuration management for optiscore

use crate::error::{OptiScoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the Generative Language API key.
/// The key never lives in the config file.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: ModelConfig,
    pub records: RecordsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identity sent with every generate call
    pub name: String,
    pub api_base: String,
    /// Request timeout for the model round trip, in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Path of the append-only analysis log
    pub path: PathBuf,
    /// How many recent records the report tail shows
    pub tail_size: usize,
    /// Bin count for the match-score histogram
    pub histogram_bins: usize,
}

impl Default for Config {
    fn default() -> Self {
        let records_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("optiscore")
            .join("analysis_records.csv");

        Self {
            model: ModelConfig {
                name: "gemini-1.5-flash".to_string(),
                api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                timeout_secs: 60,
            },
            records: RecordsConfig {
                path: records_path,
                tail_size: 10,
                histogram_bins: 10,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                OptiScoreError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            OptiScoreError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("optiscore")
            .join("config.toml")
    }

    /// Credential interface: the API key comes from the process environment
    /// only. No analysis may proceed without it.
    pub fn api_key() -> Result<String> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(OptiScoreError::Authentication(format!(
                "{} is not set; the analysis pipeline cannot start without it",
                API_KEY_ENV
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.name, "gemini-1.5-flash");
        assert_eq!(config.records.tail_size, 10);
        assert_eq!(config.records.histogram_bins, 10);
        assert!(config
            .records
            .path
            .to_string_lossy()
            .ends_with("analysis_records.csv"));
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        // First load creates the file with defaults
        let created = Config::load_from(path.clone()).unwrap();
        assert!(path.exists());

        // Second load reads it back
        let loaded = Config::load_from(path).unwrap();
        assert_eq!(created.model.name, loaded.model.name);
        assert_eq!(created.records.tail_size, loaded.records.tail_size);
    }
}
