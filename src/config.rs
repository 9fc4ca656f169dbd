//! Application configuration.
//!
//! Stores an optional backend URL and the last values typed into each form, so
//! the interactive UI starts where the user left off.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the review backend; the local backend when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
    pub file_path: String,
    pub project_path: String,
    pub ignore_files: String,
    pub file_extensions: String,
    pub bug_file_path: String,
    pub error_msg: String,
}

/// Returns `~/.codepulse/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Unable to determine home directory",
        )
    })?;
    Ok(home.join(".codepulse").join("config.json"))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration, or the default one when no path is known or the
    /// file is absent or unreadable. An unreadable file is reported on stderr.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Config::default();
        };
        Config::load_from_file(path).unwrap_or_else(|e| {
            crate::print_cmd_warn!(
                "Ignoring unreadable config",
                "{}: {} (it is replaced when the dashboard saves)",
                path.display(),
                e
            );
            Config::default()
        })
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
