//! Changeset extraction from git commits

use std::borrow::Cow;

use anyhow::{Context, Result};
use git2::{Delta, DiffDelta, DiffFindOptions, Repository};
use tracing::{debug, warn};

use crate::changeset::{Changeset, EditType, FileChange};

/// Load the changeset of the commit `revision` resolves to.
///
/// The commit is diffed against its first parent, or against the empty tree
/// for a root commit, with rename detection enabled.
pub fn load_changeset(repo: &Repository, revision: &str) -> Result<Changeset> {
    let commit = repo
        .revparse_single(revision)
        .with_context(|| format!("Failed to resolve revision: {revision}"))?
        .peel_to_commit()
        .with_context(|| format!("Revision does not point at a commit: {revision}"))?;

    let commit_tree = commit.tree().context("Failed to get commit tree")?;

    let parent = if commit.parent_count() > 0 {
        Some(commit.parent(0).context("Failed to get parent commit")?)
    } else {
        None
    };
    let parent_tree = parent
        .as_ref()
        .map(|p| p.tree())
        .transpose()
        .context("Failed to get parent tree")?;

    let mut diff = repo
        .diff_tree_to_tree(parent_tree.as_ref(), Some(&commit_tree), None)
        .context("Failed to create diff")?;
    diff.find_similar(Some(DiffFindOptions::new().renames(true)))
        .context("Failed to detect renamed files")?;

    let changes: Vec<FileChange> = diff.deltas().filter_map(|d| file_change(&d)).collect();

    debug!(
        commit = %commit.id(),
        files = changes.len(),
        root = parent.is_none(),
        "Loaded changeset"
    );

    Ok(Changeset::new(
        commit.id().to_string(),
        parent.map(|p| p.id().to_string()),
        changes,
    ))
}

fn file_change(delta: &DiffDelta<'_>) -> Option<FileChange> {
    let edit_type = match delta.status() {
        Delta::Added => EditType::Add,
        Delta::Deleted => EditType::Delete,
        Delta::Modified => EditType::Edit,
        Delta::Renamed => EditType::Rename,
        _ => EditType::Other,
    };

    let old_path = delta.old_file().path_bytes().map(lossy_path);
    let new_path = delta.new_file().path_bytes().map(lossy_path);

    let path = if edit_type == EditType::Delete {
        old_path.clone()
    } else {
        new_path.clone()
    };
    let Some(path) = path else {
        warn!(status = ?delta.status(), "Skipping file without a path");
        return None;
    };

    let mut change = FileChange::new(path, edit_type);
    if edit_type != EditType::Add {
        change.src = old_path;
    }
    if edit_type != EditType::Delete {
        change.dst = new_path;
    }
    Some(change)
}

/// Non UTF-8 names are kept, lossily, so they still count towards diff ordinals.
fn lossy_path(bytes: &[u8]) -> String {
    let path = String::from_utf8_lossy(bytes);
    if matches!(path, Cow::Owned(_)) {
        warn!(path = %path, "Converted non UTF-8 path lossily");
    }
    path.into_owned()
}
