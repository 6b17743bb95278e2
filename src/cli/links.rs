//! Links command — outputs the browser links of a commit in YAML format.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::browser::{Browser, BrowserKind};
use crate::config::Settings;
use crate::data::{to_yaml, LinkReport};
use crate::git::GitRepository;

/// Links command options.
#[derive(Parser)]
pub struct LinksCommand {
    /// Revision to link (e.g., HEAD, HEAD~2, a commit id or tag).
    #[arg(value_name = "REVISION", default_value = "HEAD")]
    pub revision: String,

    /// Path to the git repository.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo: PathBuf,

    /// Base URL of the repository browser, overriding the settings file.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Repository browser kind, overriding the settings file.
    #[arg(long, value_name = "KIND")]
    pub browser: Option<BrowserKind>,

    /// Settings file to read instead of ~/.gitlist-links/settings.json.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl LinksCommand {
    /// Executes the links command.
    pub fn execute(self) -> Result<()> {
        let yaml = self.render()?;
        print!("{yaml}");
        Ok(())
    }

    /// Builds the YAML link report without printing it.
    pub fn render(&self) -> Result<String> {
        let settings = match &self.config {
            Some(path) => Settings::load_from_path(path)?,
            None => Settings::load()?,
        };
        let browser_config = settings.resolve_browser(self.browser, self.url.as_deref())?;
        debug!(kind = %browser_config.kind, url = %browser_config.url, "Resolved browser");

        let browser = Browser::from_config(&browser_config)
            .context("Invalid repository browser configuration")?;

        let repo = GitRepository::open_at(&self.repo)?;
        let changeset = repo.load_changeset(&self.revision)?;

        let report = LinkReport::build(&browser, &changeset)
            .with_context(|| format!("Failed to build links for {}", changeset.id()))?;

        to_yaml(&report)
    }
}
