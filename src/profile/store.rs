//! Profile file I/O

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::profile as profile_config;
use crate::error::GocdError;

use super::models::ProfileConfig;

/// Reads the YAML profile file
pub struct ProfileStore {
    config_path: PathBuf,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create a new store using the default path (~/.gocd.conf)
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a store with a custom config path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(profile_config::FILE_NAME)
    }

    /// Path of the profile file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load all profiles from disk.
    /// Returns an empty map if the file doesn't exist, errors on corrupt YAML.
    pub fn load(&self) -> Result<ProfileConfig, GocdError> {
        if !self.config_path.exists() {
            return Ok(ProfileConfig::new());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            GocdError::Config(format!(
                "Failed to read profile file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(ProfileConfig::new());
        }

        serde_yml::from_str(&content).map_err(|e| {
            GocdError::Config(format!(
                "Failed to parse profile file {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }
}
