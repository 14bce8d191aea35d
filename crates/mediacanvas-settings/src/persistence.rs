//! Settings Persistence
//!
//! Remembers where the configuration came from so it can be written back.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::SettingsResult;

/// Config plus the file it is bound to.
#[derive(Debug, Clone, Default)]
pub struct SettingsPersistence {
    config: Config,
    path: Option<PathBuf>,
}

impl SettingsPersistence {
    /// Create new persistence layer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self {
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Loads `path`, falling back to defaults when it is missing or
    /// unreadable. The result stays bound to `path` either way.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Self {
                config: Config::default(),
                path: Some(path.to_path_buf()),
            };
        }

        match Self::load_from_file(path) {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
                Self {
                    config: Config::default(),
                    path: Some(path.to_path_buf()),
                }
            }
        }
    }

    /// Save settings to file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.config.save_to_file(path)
    }

    /// Writes back to the bound path. Returns `false` when unbound.
    pub fn save(&self) -> SettingsResult<bool> {
        match &self.path {
            Some(path) => {
                self.save_to_file(path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
