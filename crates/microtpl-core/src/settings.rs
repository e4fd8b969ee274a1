//! Persisted settings and where they live.
//!
//! Settings files are discovered in precedence order:
//! 1. `./.micro-templates.toml` (project-local)
//! 2. `~/.config/micro-templates.toml` (user-global)
//!
//! When neither exists, settings default and are saved to the user-global path.
//! Keys missing from a file take their default values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::marker::MarkerColumn;

const LOCAL_FILENAME: &str = ".micro-templates.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_FILENAME: &str = "micro-templates.toml";

/// Tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Vault-relative folder holding the templates (`""` is the vault root).
    pub templates_dir: String,

    /// Column policy for markers on the first inserted line.
    pub marker_column: MarkerColumn,
}

impl Settings {
    /// Set the templates folder, trimming surrounding whitespace.
    pub fn set_templates_dir(&mut self, dir: &str) {
        self.templates_dir = dir.trim().to_string();
    }
}

/// Location of the settings file plus load/save.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    /// Explicitly chosen paths turn read/parse failures into errors.
    explicit: bool,
}

impl SettingsStore {
    /// Store at an explicit path (e.g. from `--config`).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    /// Discover the settings file from the current directory and `$HOME`.
    pub fn discover() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let home = std::env::var_os("HOME").map(PathBuf::from);
        Self::discover_in(&cwd, home.as_deref())
    }

    fn discover_in(cwd: &Path, home: Option<&Path>) -> Self {
        let local = cwd.join(LOCAL_FILENAME);
        let global = home.map(|h| h.join(GLOBAL_CONFIG_DIR).join(GLOBAL_FILENAME));

        let path = if local.is_file() {
            local
        } else {
            match global {
                Some(global) => global,
                None => local,
            }
        };

        Self {
            path,
            explicit: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, defaulting when the file does not exist.
    ///
    /// A discovered file that cannot be read or parsed is logged and ignored; an
    /// explicit one is an error.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.is_file() {
            tracing::debug!(path = ?self.path, "No settings file, using defaults");
            return Ok(Settings::default());
        }

        match self.read() {
            Ok(settings) => {
                tracing::debug!(path = ?self.path, "Loaded settings");
                Ok(settings)
            }
            Err(e) if !self.explicit => {
                tracing::warn!(path = ?self.path, error = %e, "Ignoring settings file, using defaults");
                Ok(Settings::default())
            }
            Err(e) => Err(e),
        }
    }

    fn read(&self) -> Result<Settings, SettingsError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write settings, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let contents = toml::to_string_pretty(settings)?;
        let write_err = |source: std::io::Error| SettingsError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.path, contents).map_err(write_err)?;

        tracing::debug!(path = ?self.path, "Saved settings");
        Ok(())
    }
}
