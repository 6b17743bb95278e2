//! CLI interface for gitlist-links.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod browsers;
pub mod links;

pub use browsers::BrowsersCommand;
pub use links::LinksCommand;

/// gitlist-links: Maps git changesets to repository browser URLs.
#[derive(Parser)]
#[command(name = "gitlist-links")]
#[command(about = "Maps git changesets to repository browser URLs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Prints the changeset, file and diff links of a commit as YAML.
    Links(LinksCommand),
    /// Lists the supported repository browsers.
    Browsers(BrowsersCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Links(links_cmd) => links_cmd.execute(),
            Commands::Browsers(browsers_cmd) => browsers_cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_links_overrides() {
        let cli = Cli::try_parse_from([
            "gitlist-links",
            "links",
            "--url",
            "http://gitlist.example.com/repo",
            "--browser",
            "gitlist",
            "HEAD~1",
        ])
        .unwrap();

        let Commands::Links(links) = cli.command else {
            panic!("expected links command");
        };
        assert_eq!(links.revision, "HEAD~1");
        assert_eq!(links.url.as_deref(), Some("http://gitlist.example.com/repo"));
        assert_eq!(links.browser, Some(crate::browser::BrowserKind::GitList));
    }

    #[test]
    fn rejects_unknown_browser() {
        let result = Cli::try_parse_from(["gitlist-links", "links", "--browser", "gitweb"]);
        assert!(result.is_err());
    }
}
