//! Link report data and serialization.

use serde::{Deserialize, Serialize};

use crate::browser::RepositoryBrowser;
use crate::changeset::{Changeset, EditType};
use crate::error::BrowserError;

pub mod yaml;

pub use yaml::*;

/// All links a browser produces for one changeset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReport {
    /// Display name of the browser that built the links.
    pub browser: String,
    /// Commit id of the changeset.
    pub commit: String,
    /// First parent commit id (absent for root commits).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Link to the changeset page.
    pub link: String,
    /// Per-file links, in the order git reported the files.
    pub files: Vec<FileLinks>,
}

/// Links for one affected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLinks {
    /// File path relative to the repository root.
    pub path: String,
    /// Kind of change.
    pub edit_type: EditType,
    /// Link to the file at this revision.
    pub file: String,
    /// Link to the file's diff, only present for in-place edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl LinkReport {
    /// Builds the report for `changeset` using `browser`.
    pub fn build(
        browser: &dyn RepositoryBrowser,
        changeset: &Changeset,
    ) -> Result<Self, BrowserError> {
        let files = changeset
            .path_changes()
            .map(|path| {
                Ok(FileLinks {
                    path: path.path().to_string(),
                    edit_type: path.edit_type(),
                    file: browser.file_link(&path)?.to_string(),
                    diff: browser.diff_link(&path)?.map(|url| url.to_string()),
                })
            })
            .collect::<Result<Vec<_>, BrowserError>>()?;

        Ok(Self {
            browser: browser.kind().display_name().to_string(),
            commit: changeset.id().to_string(),
            parent: changeset.parent().map(str::to_string),
            link: browser.changeset_link(changeset)?.to_string(),
            files,
        })
    }
}
