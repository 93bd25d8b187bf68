//! Configuration management for the resume tailor

use crate::error::{Result, ResumeTailorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub keyword_matching: KeywordMatchingConfig,
    pub llm: LlmConfig,
    pub output: OutputConfig,
}

/// Tier thresholds for the match score. Must be monotonic:
/// excellent >= good >= fair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub excellent_threshold: u8,
    pub good_threshold: u8,
    pub fair_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            excellent_threshold: 85,
            good_threshold: 70,
            fair_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordMatchingConfig {
    pub case_sensitive: bool,
    pub min_keyword_length: usize,
}

impl Default for KeywordMatchingConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            min_keyword_length: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            max_output_tokens: 2048,
            max_retries: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
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
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeTailorError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeTailorError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-tailor")
            .join("config.toml")
    }

    /// Checks invariants that would make scoring meaningless. Called once at
    /// startup, not per analysis.
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        if scoring.excellent_threshold < scoring.good_threshold
            || scoring.good_threshold < scoring.fair_threshold
        {
            return Err(ResumeTailorError::Configuration(format!(
                "Tier thresholds must satisfy excellent >= good >= fair, got {}/{}/{}",
                scoring.excellent_threshold, scoring.good_threshold, scoring.fair_threshold
            )));
        }

        if self.keyword_matching.min_keyword_length == 0 {
            return Err(ResumeTailorError::Configuration(
                "keyword_matching.min_keyword_length must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.excellent_threshold, 85);
        assert_eq!(config.scoring.good_threshold, 70);
        assert_eq!(config.scoring.fair_threshold, 50);
        assert!(!config.keyword_matching.case_sensitive);
    }

    #[test]
    fn test_non_monotonic_thresholds_rejected() {
        let mut config = Config::default();
        config.scoring.excellent_threshold = 60;

        let result = config.validate();
        assert!(matches!(result, Err(ResumeTailorError::Configuration(_))));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[scoring]\nexcellent_threshold = 90\n").unwrap();

        assert_eq!(config.scoring.excellent_threshold, 90);
        assert_eq!(config.scoring.good_threshold, 70);
        assert_eq!(config.llm.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.fair_threshold = 40;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.fair_threshold, 40);
    }
}
