//! Application configuration: backend base URL, site coordinates used as the
//! location fallback, and transport timeout. One YAML file under the config
//! directory, loaded once per invocation.

use crate::errors::{AppError, AppResult};
use crate::models::coordinates::Coordinates;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_allow_location() -> bool {
    true
}
fn default_timeout_secs() -> u64 {
    20
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the attendance backend, e.g. "https://sta.example.com/api".
    #[serde(default)]
    pub base_url: String,
    /// Site coordinates, decimal degrees. Used when no `--at` override is
    /// given on a movement command.
    #[serde(default)]
    pub site_lat: Option<f64>,
    #[serde(default)]
    pub site_lon: Option<f64>,
    /// Whether movements may be geotagged at all. The collaborator answer
    /// behind "location permission granted".
    #[serde(default = "default_allow_location")]
    pub allow_location: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            site_lat: None,
            site_lon: None,
            allow_location: default_allow_location(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("enturno")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".enturno")
        }
    }

    /// Full path of the config file inside `dir`.
    pub fn config_file(dir: &Path) -> PathBuf {
        dir.join("enturno.conf")
    }

    /// Full path of the persisted session state inside `dir`.
    pub fn session_file(dir: &Path) -> PathBuf {
        dir.join("session.yaml")
    }

    /// Load configuration from `dir`, or return defaults if no file exists.
    pub fn load(dir: &Path) -> AppResult<Self> {
        let path = Self::config_file(dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {:?}: {}", path, e)))
    }

    /// Write the configuration file into `dir`, creating it as needed.
    pub fn save(&self, dir: &Path) -> AppResult<()> {
        fs::create_dir_all(dir)?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(dir), yaml)?;
        Ok(())
    }

    pub fn site_coordinates(&self) -> Option<Coordinates> {
        match (self.site_lat, self.site_lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}
