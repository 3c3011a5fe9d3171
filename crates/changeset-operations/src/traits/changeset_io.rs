use std::path::{Path, PathBuf};

use changeset_project::ChangesetConfig;

use crate::Result;
use crate::types::RawChangeset;

pub trait ChangesetReader: Send + Sync {
    /// Qualifying changeset files directly inside `changeset_dir`.
    ///
    /// A missing directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    fn list_changesets(
        &self,
        changeset_dir: &Path,
        config: &ChangesetConfig,
    ) -> Result<Vec<PathBuf>>;

    /// # Errors
    ///
    /// Returns an error if the file or its metadata cannot be read.
    fn read_changeset(&self, path: &Path) -> Result<RawChangeset>;
}

pub trait ChangesetWriter: Send + Sync {
    /// A file name in `changeset_dir` that no existing file uses.
    fn unique_filename(&self, changeset_dir: &Path, extension: &str) -> String;

    fn filename_exists(&self, changeset_dir: &Path, filename: &str) -> bool;

    /// Replaces the file at `path` so readers never observe partial content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_changeset(&self, path: &Path, content: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn delete_changeset(&self, path: &Path) -> Result<()>;

    /// Deletes temporary files an interrupted write left in `changeset_dir`
    /// and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed or a file cannot
    /// be removed.
    fn remove_temp_files(&self, changeset_dir: &Path) -> Result<usize>;
}
