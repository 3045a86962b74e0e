use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
///
/// Loaded from the config file; CLI flags override on top.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        toml::from_str(contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// XDG config dir on Unix-like systems, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("travelscout");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL or local path of the catalog document
    #[serde(default = "default_catalog_source")]
    pub source: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_catalog_source() -> String {
    "travel_recommendation_api.json".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_fallback_image")]
    pub fallback_image_url: String,
}

fn default_fallback_image() -> String {
    crate::render::FALLBACK_IMAGE_URL.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fallback_image_url: default_fallback_image(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How often the TUI redraws while idle, in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}
