//! Key layout configuration.

use serde::Deserialize;
use std::path::Path;

/// Key layout configuration.
///
/// `prefix_separator` joins the store prefix and the logical key;
/// `type_suffix` appended to a storage key names the sibling entry holding
/// the value's type tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Separator between the store prefix and logical keys.
    pub prefix_separator: String,
    /// Suffix appended to a storage key to form its type tag key.
    pub type_suffix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            prefix_separator: "/".to_string(),
            type_suffix: ":___type".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
