//! Configuration management for the skill matcher

use crate::error::{Result, SkillMatcherError};
use crate::matching::SkillCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

/// Source of the skill catalog. Editing the list (or swapping the
/// config file) retargets the matcher at a different industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub include_recommendations: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                skills: SkillCatalog::default()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                include_recommendations: true,
                color_output: true,
            },
        }
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
        let config: Config = toml::from_str(&content)
            .map_err(|e| SkillMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-matcher")
            .join("config.toml")
    }

    /// Materialize the configured catalog for a scoring operation.
    pub fn skill_catalog(&self) -> SkillCatalog {
        SkillCatalog::new(self.catalog.skills.clone())
    }
}
