use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_base_currency() -> String {
    "USD".to_string()
}

fn default_targets() -> Vec<String> {
    ["EUR", "GBP", "JPY", "CAD", "AUD"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_decimal_places() -> usize {
    2
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,
    pub rates_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            base_currency: default_base_currency(),
            targets: default_targets(),
            decimal_places: default_decimal_places(),
            rates_path: None,
        }
    }
}

impl AppConfig {
    /// Loads the default config file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "fxrates", "fxrates")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn rates_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.rates_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("org", "fxrates", "fxrates")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().join("rates.json"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
