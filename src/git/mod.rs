//! Git repository access for building changesets.

pub mod changeset;
pub mod repository;

pub use changeset::load_changeset;
pub use repository::GitRepository;
