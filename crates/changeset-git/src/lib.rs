mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::{DEFAULT_REMOTE, Repository};
pub use types::{FileChange, FileStatus};

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not inside a git repository.
pub fn is_revision_available(path: &Path, refspec: &str) -> Result<bool> {
    Ok(Repository::open(path)?.is_revision_available(refspec))
}

/// # Errors
///
/// Returns an error if the path is not a git repository or either revision
/// cannot be resolved.
pub fn changed_files(path: &Path, base: &str, head: &str) -> Result<Vec<FileChange>> {
    Repository::open(path)?.changed_files(base, head)
}
