//! Locating, reading and creating the settings file.

use crate::Settings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the settings file inside the config directory.
const SETTINGS_FILE: &str = "config.json";

/// Errors that can occur while reading or writing the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read the settings file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the settings file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Settings file is not valid JSON or holds invalid values.
    #[error("Failed to parse settings file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize settings.
    #[error("Failed to serialize settings: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// Settings file already exists and would be overwritten.
    #[error("Settings file already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Access to the settings file at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Path to the settings file.
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store for the settings file at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default settings file path.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.config/coatcalc/config.json`
    /// - macOS: `~/Library/Application Support/coatcalc/config.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\coatcalc\config\config.json`
    ///
    /// Falls back to `~/.coatcalc/config.json` if the platform-specific
    /// location cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "coatcalc")
            .map_or_else(dirs_fallback, |proj_dirs| proj_dirs.config_dir().to_path_buf())
            .join(SETTINGS_FILE)
    }

    /// Creates a store at the default path.
    #[must_use]
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the settings file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads settings, returning defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Settings> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;

        let settings = serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %self.path.display(), "loaded settings file");
        Ok(settings)
    }

    /// Writes `settings` to the file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists and `overwrite` is false, or if
    /// the file cannot be written.
    pub fn save(&self, settings: &Settings, overwrite: bool) -> Result<()> {
        if self.exists() && !overwrite {
            return Err(ConfigError::AlreadyExists(self.path.clone()));
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json + "\n").map_err(|e| ConfigError::WriteFile {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::with_default_path()
    }
}

/// Fallback config directory when platform directories are unavailable.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".coatcalc")
}
