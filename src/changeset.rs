//! Changeset data model consumed by the repository browsers.
//!
//! A [`Changeset`] owns the [`FileChange`] records of one commit. Individual
//! files are handed to browsers as [`PathChange`] views, which can only be
//! obtained from the changeset they belong to.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification of a file's change within a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditType {
    /// File created by the commit.
    Add,
    /// File content modified in place.
    Edit,
    /// File removed by the commit.
    Delete,
    /// File moved to a new path.
    Rename,
    /// Copies, type changes and anything else git reports.
    Other,
}

impl EditType {
    /// Returns the lowercase name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Rename => "rename",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file's change record within a changeset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Path of the file relative to the repository root
    pub path: String,
    /// Kind of change applied to the file
    pub edit_type: EditType,
    /// Path before the change, when the file existed in the parent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Path after the change, when the file exists in the commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst: Option<String>,
}

impl FileChange {
    /// Creates a change record without source or destination paths.
    pub fn new(path: impl Into<String>, edit_type: EditType) -> Self {
        Self {
            path: path.into(),
            edit_type,
            src: None,
            dst: None,
        }
    }

    /// Creates an in-place edit whose source and destination are both `path`.
    pub fn edited(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(path.clone(), EditType::Edit)
            .with_src(path.clone())
            .with_dst(path)
    }

    /// Sets the source path.
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Sets the destination path.
    pub fn with_dst(mut self, dst: impl Into<String>) -> Self {
        self.dst = Some(dst.into());
        self
    }
}

/// Metadata for one commit: id, parent link and affected files.
#[derive(Debug, Clone)]
pub struct Changeset {
    id: String,
    parent: Option<String>,
    changes: Vec<FileChange>,
    // Diff page ordinal of each entry in `changes`, same indexing.
    ordinals: Vec<usize>,
}

impl Changeset {
    /// Builds a changeset and caches the diff ordinal of every file.
    pub fn new(id: impl Into<String>, parent: Option<String>, changes: Vec<FileChange>) -> Self {
        let id = id.into();
        let order = PathOrder::new(changes.iter().map(|change| change.path.as_str()));

        let ordinals = changes
            .iter()
            .map(|change| {
                let ordinal = order.ordinal(&change.path);
                debug_assert!(
                    ordinal.is_some(),
                    "path '{}' missing from its own changeset",
                    change.path
                );
                ordinal.unwrap_or_default()
            })
            .collect();

        debug!(
            changeset = %id,
            files = changes.len(),
            distinct_paths = order.len(),
            "Cached diff ordinals"
        );

        Self {
            id,
            parent,
            changes,
            ordinals,
        }
    }

    /// Commit id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the first parent, absent for root commits.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Affected paths in the order they were supplied.
    pub fn affected_paths(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|change| change.path.as_str())
    }

    /// Raw change records.
    pub fn changes(&self) -> &[FileChange] {
        &self.changes
    }

    /// Number of change records.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the changeset touches no files.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Views of every affected file, bound to this changeset.
    pub fn path_changes(&self) -> impl Iterator<Item = PathChange<'_>> {
        (0..self.changes.len()).map(move |index| PathChange {
            changeset: self,
            index,
        })
    }

    /// View of the first change recorded for `path`.
    pub fn path_change(&self, path: &str) -> Option<PathChange<'_>> {
        self.changes
            .iter()
            .position(|change| change.path == path)
            .map(|index| PathChange {
                changeset: self,
                index,
            })
    }
}

/// A file change viewed through the changeset that owns it.
#[derive(Debug, Clone, Copy)]
pub struct PathChange<'a> {
    changeset: &'a Changeset,
    index: usize,
}

impl<'a> PathChange<'a> {
    /// The owning changeset.
    pub fn changeset(&self) -> &'a Changeset {
        self.changeset
    }

    /// The underlying change record.
    pub fn change(&self) -> &'a FileChange {
        &self.changeset.changes[self.index]
    }

    /// File path.
    pub fn path(&self) -> &'a str {
        &self.change().path
    }

    /// Kind of change.
    pub fn edit_type(&self) -> EditType {
        self.change().edit_type
    }

    /// Path before the change.
    pub fn src(&self) -> Option<&'a str> {
        self.change().src.as_deref()
    }

    /// Path after the change.
    pub fn dst(&self) -> Option<&'a str> {
        self.change().dst.as_deref()
    }

    /// Zero-based position of the path among the changeset's sorted, distinct paths.
    pub fn ordinal(&self) -> usize {
        self.changeset.ordinals[self.index]
    }
}

/// The affected paths of a changeset in the order a commit page lists their diffs.
///
/// Paths are sorted by bytes and duplicates collapse to one entry, so each
/// distinct path has a single zero-based ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOrder<'p> {
    sorted: Vec<&'p str>,
}

impl<'p> PathOrder<'p> {
    /// Sorts and de-duplicates `affected_paths`.
    pub fn new<I>(affected_paths: I) -> Self
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut sorted: Vec<&str> = affected_paths.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self { sorted }
    }

    /// Position of `path`, or `None` when it is not an affected path.
    pub fn ordinal(&self, path: &str) -> Option<usize> {
        self.sorted
            .binary_search_by(|probe| Ord::cmp(*probe, path))
            .ok()
    }

    /// Number of distinct paths.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Whether there are no paths.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}
