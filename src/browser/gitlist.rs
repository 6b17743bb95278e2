//! GitList repository browser.
//!
//! GitList serves commits at `{base}commit/{id}` and files at
//! `{base}blob/{id}/{path}`. Every file diff of a commit is rendered on the
//! commit page, addressed by a zero-based `#N` anchor in path order.

use tracing::{debug, trace};
use url::Url;

use crate::browser::{BrowserKind, RepositoryBrowser};
use crate::changeset::{Changeset, EditType, PathChange};
use crate::error::{BrowserError, Result};

/// Link formatter for a GitList instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitList {
    url: Url,
}

impl GitList {
    /// Creates a formatter for the GitList repository at `url`.
    ///
    /// The URL path is normalized to end with `/` so links nest beneath it.
    pub fn new(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|source| BrowserError::InvalidConfiguration {
            url: url.to_string(),
            source,
        })?;
        let url = normalize_to_end_with_slash(parsed);

        debug!(base = %url, "Configured GitList browser");
        Ok(Self { url })
    }

    /// The normalized base URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Appends `segments` to the base path, each percent-encoded as one segment.
    ///
    /// The base URL's query and fragment are not carried into links.
    fn compose(&self, segments: &[&str]) -> Result<Url> {
        let failure = |reason| BrowserError::LinkComposition {
            base: self.url.to_string(),
            segments: segments.join("/"),
            reason,
        };

        // The URL parser drops these, so two different inputs would share a link.
        if segments
            .iter()
            .any(|s| matches!(*s, "." | "..") || s.contains(['\t', '\n', '\r']))
        {
            return Err(failure(
                "dot segments and tab or newline characters cannot be addressed",
            ));
        }

        let mut link = self.url.clone();
        link.set_query(None);
        link.set_fragment(None);
        link.path_segments_mut()
            .map_err(|()| failure("base URL cannot have path segments"))?
            .pop_if_empty()
            .extend(segments);

        trace!(link = %link, "Composed link");
        Ok(link)
    }

    /// Links to the file's anchor on the commit page, whatever the edit type.
    fn diff_link_regardless_of_edit_type(&self, path: &PathChange<'_>) -> Result<Url> {
        let mut link = self.changeset_link(path.changeset())?;
        link.set_fragment(Some(&path.ordinal().to_string()));
        Ok(link)
    }
}

impl RepositoryBrowser for GitList {
    fn kind(&self) -> BrowserKind {
        BrowserKind::GitList
    }

    fn changeset_link(&self, changeset: &Changeset) -> Result<Url> {
        self.compose(&["commit", changeset.id()])
    }

    fn diff_link(&self, path: &PathChange<'_>) -> Result<Option<Url>> {
        if path.edit_type() != EditType::Edit
            || path.src().is_none()
            || path.dst().is_none()
            || path.changeset().parent().is_none()
        {
            return Ok(None);
        }
        self.diff_link_regardless_of_edit_type(path).map(Some)
    }

    fn file_link(&self, path: &PathChange<'_>) -> Result<Url> {
        // GitList has no page for a file at the revision that deleted it.
        if path.edit_type() == EditType::Delete {
            return self.diff_link_regardless_of_edit_type(path);
        }
        let mut segments = vec!["blob", path.changeset().id()];
        segments.extend(path.path().split('/'));
        self.compose(&segments)
    }
}

fn normalize_to_end_with_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
