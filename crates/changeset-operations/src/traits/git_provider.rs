use std::path::Path;

use changeset_git::FileChange;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// Changes on `head` since its merge base with `base`.
    ///
    /// Returned paths are absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened, a revision does
    /// not resolve, or the diff fails.
    fn changed_files(&self, project_root: &Path, base: &str, head: &str)
    -> Result<Vec<FileChange>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    fn is_revision_available(&self, project_root: &Path, revision: &str) -> Result<bool>;

    /// # Errors
    ///
    /// Returns an error if the branch cannot be fetched from the default remote.
    fn fetch_branch(&self, project_root: &Path, branch: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the revision cannot be fetched from the default remote.
    fn fetch_revision(&self, project_root: &Path, revision: &str) -> Result<()>;

    /// Contents of the file at absolute `path` as committed in `revision`.
    ///
    /// Returns `None` when the revision has no such file.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened, the revision does
    /// not resolve, or the file is not valid UTF-8.
    fn read_file_at(&self, project_root: &Path, revision: &str, path: &Path)
    -> Result<Option<String>>;
}
