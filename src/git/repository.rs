//! Git repository operations

use anyhow::{Context, Result};
use git2::Repository;

use crate::changeset::Changeset;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open repository at specified path
    pub fn open_at<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path)
            .with_context(|| format!("Failed to open git repository: {}", path.display()))?;

        Ok(Self { repo })
    }

    /// Load the changeset of a single commit
    pub fn load_changeset(&self, revision: &str) -> Result<Changeset> {
        super::load_changeset(&self.repo, revision)
    }
}
