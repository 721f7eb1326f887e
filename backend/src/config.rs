//! # Application Configuration
//!
//! Settings are read from an optional YAML file. A missing file means
//! defaults; a present but malformed file is an error.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_directory: "/home/me/.local/share/BizDesk"
//! log_level: "info"
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform data dir
pub const APP_DIRECTORY_NAME: &str = "BizDesk";

/// Used when the platform has no data directory
pub const FALLBACK_DATA_DIRECTORY: &str = "bizdesk-data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the collection files live
    pub data_directory: PathBuf,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Config pointing at `data_directory`, other settings default
    pub fn with_data_directory(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
            ..Self::default()
        }
    }

    /// Load the config at `path`, or defaults if it does not exist.
    ///
    /// The data directory is created either way.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let yaml_content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid config file {:?}", path))?;
            debug!("Loaded config from {:?}", path);
            config
        } else {
            info!("No config file at {:?}, using defaults", path);
            AppConfig::default()
        };

        config.ensure_data_directory()?;
        Ok(config)
    }

    /// Write the config as YAML (temp file, then rename)
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yaml::to_string(self)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, path)?;

        debug!("Saved config to {:?}", path);
        Ok(())
    }

    fn ensure_data_directory(&self) -> Result<()> {
        if !self.data_directory.exists() {
            fs::create_dir_all(&self.data_directory).with_context(|| {
                format!("Failed to create data directory {:?}", self.data_directory)
            })?;
            info!("Created data directory: {:?}", self.data_directory);
        }
        Ok(())
    }
}

/// `<platform data dir>/BizDesk`, or `./bizdesk-data`
pub fn default_data_directory() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIRECTORY_NAME),
        None => PathBuf::from(FALLBACK_DATA_DIRECTORY),
    }
}
