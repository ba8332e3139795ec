//! Dashboard configuration.
//!
//! Read from `quitados.json` in the working directory when present; any missing
//! field falls back to its default.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "quitados.json";

pub const DEFAULT_CSV_PATH: &str = "DEMANDAS JANEIRO 2024 - QUITADOS.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Settlement report to load.
    pub csv_path: PathBuf,
    /// Reporting period shown in chart titles.
    pub period_label: String,
    /// Initial window size in points.
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            period_label: "Janeiro 2024".to_string(),
            window_size: [1400.0, 900.0],
        }
    }
}

impl DashboardConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from `path`, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), csv = %config.csv_path.display(), "loaded config");
        Ok(config)
    }
}
