//! Persisted user preferences
//!
//! A single stored value today: the theme. Loaded once at startup and
//! written through on every toggle so the file always agrees with what is
//! on screen. A missing file means the default theme.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;

/// Light or dark display choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Glyph shown on the toggle button, mirroring the stored value
    pub fn glyph(self) -> &'static str {
        match self {
            ThemePreference::Dark => "☾",
            ThemePreference::Light => "☀",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }
}

impl std::str::FromStr for ThemePreference {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(crate::Error::Prefs(format!(
                "unknown theme '{other}', expected 'dark' or 'light'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemePreference,
}

impl Preferences {
    /// Load preferences from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Prefs(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Write preferences to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Prefs(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Flip the theme and persist immediately. Returns the new value.
    pub fn toggle_theme(&mut self, path: &Path) -> crate::Result<ThemePreference> {
        self.theme = self.theme.toggled();
        self.save_to(path)?;
        debug!(theme = self.theme.as_str(), "theme preference saved");
        Ok(self.theme)
    }

    /// Default preferences file location
    pub fn default_path() -> PathBuf {
        EngineConfig::data_dir().join("prefs.toml")
    }
}
