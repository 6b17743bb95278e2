//! Configuration management for repository browser settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::browser::BrowserKind;

/// One configured repository browser
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BrowserConfig {
    /// Which viewer product the URL points at
    #[serde(default = "default_kind")]
    pub kind: BrowserKind,

    /// Base URL of the hosted repository viewer
    pub url: String,
}

fn default_kind() -> BrowserKind {
    BrowserKind::GitList
}

/// Settings loaded from $HOME/.gitlist-links/settings.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Browser used when none is given on the command line
    #[serde(default)]
    pub browser: Option<BrowserConfig>,
}

impl Settings {
    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::default_settings_path()?)
    }

    /// Load settings from a specific path, falling back to defaults when absent
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Save settings to a specific path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))
    }

    /// Get the default settings path (~/.gitlist-links/settings.json)
    pub fn default_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".gitlist-links").join("settings.json"))
    }

    /// Resolve the browser to use, preferring explicit overrides
    pub fn resolve_browser(
        &self,
        kind: Option<BrowserKind>,
        url: Option<&str>,
    ) -> Result<BrowserConfig> {
        let configured = self.browser.as_ref();

        let url = url
            .map(str::to_string)
            .or_else(|| configured.map(|b| b.url.clone()))
            .context("No browser URL configured. Pass --url or set browser.url in settings")?;

        let kind = kind
            .or_else(|| configured.map(|b| b.kind))
            .unwrap_or_else(default_kind);

        Ok(BrowserConfig { kind, url })
    }
}
