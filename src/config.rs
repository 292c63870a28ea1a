use crate::domain::label::parse_default_prerelease;
use crate::domain::{TagPattern, DEFAULT_PRERELEASE};
use crate::error::{ApiSemverError, Result};
use semver::Prerelease;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "apisemver.toml";

/// Represents the complete configuration for api-semver.
///
/// Contains label defaults and history source settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

/// Returns the default pre-release label.
fn default_prerelease() -> String {
    DEFAULT_PRERELEASE.to_string()
}

/// Returns the default git tag pattern.
fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Labels applied to selected versions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LabelsConfig {
    /// Pre-release label for a new bracket when the caller supplies none
    #[serde(default = "default_prerelease")]
    pub default_prerelease: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        LabelsConfig {
            default_prerelease: default_prerelease(),
        }
    }
}

/// Where version history comes from, besides the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HistoryConfig {
    /// Pattern mapping git tag names to versions
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    /// Versions always merged into the history
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            tag_pattern: default_tag_pattern(),
            sources: Vec::new(),
        }
    }
}

impl Config {
    /// Validated default pre-release label
    pub fn default_prerelease(&self) -> Result<Prerelease> {
        parse_default_prerelease(&self.labels.default_prerelease)
    }

    /// Compiled git tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.history.tag_pattern.as_str())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `apisemver.toml` in current directory
/// 3. `.apisemver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(&local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from a TOML string
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| ApiSemverError::config(e.to_string()))
}
