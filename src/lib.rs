//! # gitlist-links
//!
//! Maps git changeset metadata to browsable URLs of a hosted repository
//! viewer. Only [GitList](https://gitlist.org) is supported today.
//!
//! ## Quick Start
//!
//! ```rust
//! use gitlist_links::{Changeset, EditType, FileChange, GitList, RepositoryBrowser};
//!
//! let browser = GitList::new("http://gitlist.example.com/repo").unwrap();
//! let changeset = Changeset::new(
//!     "a9182a07750c9a0dfd89a8461adf72ef5ef0885b",
//!     Some("573670a3bb1f3b939e87f1dee3e99b6bfe281fcb".to_string()),
//!     vec![FileChange::edited("b.txt"), FileChange::edited("a.txt")],
//! );
//!
//! let path = changeset.path_change("a.txt").unwrap();
//! let diff = browser.diff_link(&path).unwrap().unwrap();
//! assert_eq!(
//!     diff.as_str(),
//!     "http://gitlist.example.com/repo/commit/a9182a07750c9a0dfd89a8461adf72ef5ef0885b#0"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod browser;
pub mod changeset;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod git;

pub use crate::browser::{Browser, BrowserKind, GitList, RepositoryBrowser};
pub use crate::changeset::{Changeset, EditType, FileChange, PathChange, PathOrder};
pub use crate::cli::Cli;
pub use crate::error::BrowserError;

/// The current version of gitlist-links.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
