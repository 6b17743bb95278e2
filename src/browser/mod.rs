//! Repository browsers: web viewers that changesets can link into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::changeset::{Changeset, PathChange};
use crate::config::BrowserConfig;
use crate::error::{BrowserError, Result};

pub mod gitlist;

pub use gitlist::GitList;

/// Builds links from changeset metadata into a hosted repository viewer.
pub trait RepositoryBrowser {
    /// Which viewer product this browser targets.
    fn kind(&self) -> BrowserKind;

    /// Link to the page of a whole changeset.
    fn changeset_link(&self, changeset: &Changeset) -> Result<Url>;

    /// Link to the diff of one file, or `None` when no diff view applies.
    fn diff_link(&self, path: &PathChange<'_>) -> Result<Option<Url>>;

    /// Link to one file as of the changeset.
    fn file_link(&self, path: &PathChange<'_>) -> Result<Url>;
}

/// Supported viewer products, selected by configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    /// GitList, <https://gitlist.org>.
    GitList,
}

impl BrowserKind {
    /// Every registered browser.
    pub const ALL: &'static [Self] = &[Self::GitList];

    /// Name shown to users and accepted in configuration.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::GitList => "gitlist",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BrowserKind {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BrowserError::UnknownBrowser(s.to_string()))
    }
}

/// A configured browser of any supported kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Browser {
    /// GitList instance.
    GitList(GitList),
}

impl Browser {
    /// Creates a browser of `kind` rooted at `url`.
    pub fn new(kind: BrowserKind, url: &str) -> Result<Self> {
        match kind {
            BrowserKind::GitList => GitList::new(url).map(Self::GitList),
        }
    }

    /// Creates the browser described by a configuration entry.
    pub fn from_config(config: &BrowserConfig) -> Result<Self> {
        Self::new(config.kind, &config.url)
    }

    fn inner(&self) -> &dyn RepositoryBrowser {
        match self {
            Self::GitList(browser) => browser,
        }
    }
}

impl RepositoryBrowser for Browser {
    fn kind(&self) -> BrowserKind {
        self.inner().kind()
    }

    fn changeset_link(&self, changeset: &Changeset) -> Result<Url> {
        self.inner().changeset_link(changeset)
    }

    fn diff_link(&self, path: &PathChange<'_>) -> Result<Option<Url>> {
        self.inner().diff_link(path)
    }

    fn file_link(&self, path: &PathChange<'_>) -> Result<Url> {
        self.inner().file_link(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changeset::{EditType, FileChange};

    #[test]
    fn parses_display_name() {
        assert_eq!("gitlist".parse::<BrowserKind>().unwrap(), BrowserKind::GitList);
        assert_eq!(" GitList ".parse::<BrowserKind>().unwrap(), BrowserKind::GitList);
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "gitweb".parse::<BrowserKind>().unwrap_err();
        assert!(matches!(err, BrowserError::UnknownBrowser(name) if name == "gitweb"));
    }

    #[test]
    fn kind_round_trips_through_config_key() {
        let json = serde_json::to_string(&BrowserKind::GitList).unwrap();
        assert_eq!(json, "\"gitlist\"");
        for kind in BrowserKind::ALL {
            assert_eq!(kind.to_string().parse::<BrowserKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn from_config_builds_matching_browser() {
        let config = BrowserConfig {
            kind: BrowserKind::GitList,
            url: "https://example.com/gitlist/myrepo".to_string(),
        };
        let browser = Browser::from_config(&config).unwrap();
        assert_eq!(browser.kind(), BrowserKind::GitList);

        let changeset = Changeset::new(
            "abc123",
            Some("def456".to_string()),
            vec![FileChange::new("x.txt", EditType::Add)],
        );
        let path = changeset.path_change("x.txt").unwrap();
        assert_eq!(
            browser.file_link(&path).unwrap().as_str(),
            "https://example.com/gitlist/myrepo/blob/abc123/x.txt"
        );
        assert_eq!(browser.diff_link(&path).unwrap(), None);
    }

    #[test]
    fn from_config_surfaces_invalid_url() {
        let config = BrowserConfig {
            kind: BrowserKind::GitList,
            url: "::".to_string(),
        };
        assert!(matches!(
            Browser::from_config(&config),
            Err(BrowserError::InvalidConfiguration { .. })
        ));
    }
}
