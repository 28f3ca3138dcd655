//! User settings persistence and UI configuration.
//!
//! This module handles loading and saving user preferences for the editor
//! window: mosaic block size and the dim-surround toggle.

use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-configurable settings persisted between sessions.
///
/// Settings are stored as JSON in the user's config directory
/// (e.g., `~/.config/retouch/settings.json` on Linux).
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Mosaic block edge in buffer pixels.
    pub block_size: u32,
    /// Darken the area outside the selection while one is active.
    pub dim_overlay: bool,
}

impl Settings {
    /// Returns the path to the settings file.
    ///
    /// Creates the config directory if it doesn't exist.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "retouch").map(|dirs| {
            let config_dir = dirs.config_dir();
            if !config_dir.exists() {
                let _ = fs::create_dir_all(config_dir);
            }
            config_dir.join("settings.json")
        })
    }

    /// Loads settings from disk, falling back to defaults if not found.
    ///
    /// # Arguments
    /// * `default_block_size` - The block size to use if no settings file
    ///   exists, normally from [`crate::Config`].
    pub fn load(default_block_size: u32) -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_else(|| Self::with_defaults(default_block_size))
    }

    /// Creates default settings with the specified block size.
    pub fn with_defaults(block_size: u32) -> Self {
        Self {
            block_size: block_size.max(1),
            dim_overlay: true,
        }
    }

    /// Persists settings to disk.
    ///
    /// # Errors
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            let json = serde_json::to_string_pretty(self)?;
            fs::write(path, json)?;
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults(crate::config::DEFAULT_BLOCK_SIZE)
    }
}
