//! Configuration for the explorer

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::loader::DatasetSource;

/// Environment variable naming a TOML configuration file
pub const CONFIG_PATH_ENV: &str = "SOLAR_EXPLORER_CONFIG";
/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "solar-explorer.toml";

/// Main explorer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Dataset configuration
    pub dataset: DatasetConfig,
    /// Chart configuration
    pub chart: ChartConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Register the offline-caching worker from the page
    pub service_worker: bool,
    /// Page title
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            service_worker: true,
            title: "Solar System Explorer".to_string(),
        }
    }
}

/// Dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path or http(s) URL of the JSON document
    pub source: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: "data/solar_system_data.json".to_string(),
        }
    }
}

/// Bar chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Embed the chart in the page
    pub enabled: bool,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Series label
    pub label: String,
    /// Bar fill colour
    pub background_color: String,
    /// Bar stroke colour
    pub border_color: String,
    /// Bar stroke width
    pub border_width: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 800,
            height: 400,
            label: "Radius (km)".to_string(),
            background_color: "rgba(75, 192, 192, 0.2)".to_string(),
            border_color: "rgba(75, 192, 192, 1)".to_string(),
            border_width: 1,
        }
    }
}

impl ExplorerConfig {
    /// Load configuration the way the binaries do
    ///
    /// Reads the file named by `SOLAR_EXPLORER_CONFIG`, else
    /// `solar-explorer.toml` if it exists, else defaults. Environment
    /// overrides are applied last.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text; absent sections and keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply `SOLAR_EXPLORER_HOST`, `SOLAR_EXPLORER_PORT` and
    /// `SOLAR_EXPLORER_DATASET` through the given lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SOLAR_EXPLORER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SOLAR_EXPLORER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid SOLAR_EXPLORER_PORT: {}", port)))?;
        }
        if let Some(source) = lookup("SOLAR_EXPLORER_DATASET") {
            self.dataset.source = source;
        }
        Ok(())
    }

    /// Classified dataset source
    pub fn dataset_source(&self) -> DatasetSource {
        DatasetSource::parse(&self.dataset.source)
    }
}
