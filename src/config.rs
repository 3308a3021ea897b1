//! Configuration management for the portfolio mapper

use crate::error::{PortfolioMapperError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub mapping: MappingConfig,
    pub output: OutputConfig,
}

/// Scoring knobs for the achievement extractor.
///
/// The confidence constants are heuristic with no empirical derivation;
/// recalibrate against real CV data before trusting them in production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Inputs shorter than this yield no achievements at all.
    pub min_description_length: usize,
    /// Sentence fragments shorter than this are discarded.
    pub min_fragment_length: usize,
    pub base_confidence: f32,
    pub keyword_bonus: f32,
    pub buzzword_penalty: f32,
    pub numeric_bonus: f32,
    /// Only fragments scoring strictly above this are kept.
    pub confidence_threshold: f32,
    pub max_achievements: usize,
    /// Display descriptions are ellipsis-truncated to this many characters.
    pub max_description_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Mine experience prose for achievements and merge them into the
    /// accomplishments section.
    pub enrich_achievements: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                min_description_length: 50,
                min_fragment_length: 20,
                base_confidence: 0.4,
                keyword_bonus: 0.2,
                buzzword_penalty: 0.1,
                numeric_bonus: 0.2,
                confidence_threshold: 0.6,
                max_achievements: 3,
                max_description_length: 80,
            },
            mapping: MappingConfig {
                enrich_achievements: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Config::default().extraction
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PortfolioMapperError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            PortfolioMapperError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("portfolio-mapper")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = Config::default();
        assert_eq!(config.extraction.min_description_length, 50);
        assert_eq!(config.extraction.base_confidence, 0.4);
        assert_eq!(config.extraction.confidence_threshold, 0.6);
        assert_eq!(config.extraction.max_achievements, 3);
        assert!(config.mapping.enrich_achievements);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::default();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_config_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(
            result,
            Err(PortfolioMapperError::Configuration(_))
        ));
    }
}
