//! Configuration loading and management.
//!
//! This module provides utilities for loading pipeline configuration from
//! TOML or JSON files and discovering configuration files in the project
//! hierarchy.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CableSpecError, Result};
use crate::patterns::PatternSpec;
use crate::types::Language;

/// Main pipeline configuration.
///
/// This struct contains all configuration options for the three processing
/// stages. It can be loaded from TOML or JSON files, or created
/// programmatically.
///
/// # Example
///
/// ```rust
/// use cablespec::PipelineConfig;
///
/// // Create with defaults
/// let config = PipelineConfig::default();
/// assert!(config.classify);
///
/// // Load from TOML file
/// // let config = PipelineConfig::from_toml_file("cablespec.toml")?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Languages whose extraction patterns are active
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,

    /// Run the keyword classifier on records that pass validation
    #[serde(default = "default_true")]
    pub classify: bool,

    /// Extra extraction patterns, merged ahead of the built-in table
    #[serde(default)]
    pub extra_patterns: Vec<PatternSpec>,

    /// Correction stage options
    #[serde(default)]
    pub correction: CorrectionConfig,
}

/// Correction stage options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Restore the dropped decade zero in single-digit temperatures
    #[serde(default = "default_true")]
    pub truncation_repair: bool,

    /// Expand known abbreviations (SWA, LSOH, Cu) to their full terms
    #[serde(default = "default_true")]
    pub expand_abbreviations: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            classify: true,
            extra_patterns: Vec::new(),
            correction: CorrectionConfig::default(),
        }
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            truncation_repair: true,
            expand_abbreviations: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_languages() -> Vec<Language> {
    vec![Language::En]
}

impl PipelineConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `CableSpecError::Config` if the file doesn't exist or is
    /// invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CableSpecError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            CableSpecError::config(format!("Invalid TOML in {}: {}", path.as_ref().display(), e))
        })
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CableSpecError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CableSpecError::config(format!("Invalid JSON in {}: {}", path.as_ref().display(), e))
        })
    }

    /// Discover configuration file in parent directories.
    ///
    /// Searches for `cablespec.toml` in the current directory and parent
    /// directories.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(CableSpecError::Io)?;

        loop {
            let cablespec_toml = current.join("cablespec.toml");
            if cablespec_toml.exists() {
                return Ok(Some(Self::from_toml_file(cablespec_toml)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}
