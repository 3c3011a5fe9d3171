use std::path::Path;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Contents of `path` as committed in `revision`.
    ///
    /// `path` is relative to the repository root. Returns `None` when the
    /// revision's tree has no file at that path.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the revision cannot be resolved and
    /// [`GitError::NotUtf8`] if the file is not valid UTF-8.
    pub fn read_file(&self, revision: &str, path: &Path) -> Result<Option<String>> {
        let tree = self.resolve_commit(revision)?.tree()?;

        let entry = match tree.get_path(path) {
            Ok(entry) => entry,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let Ok(blob) = entry.to_object(&self.inner)?.into_blob() else {
            return Ok(None);
        };

        String::from_utf8(blob.content().to_vec())
            .map(Some)
            .map_err(|_| GitError::NotUtf8 {
                path: path.to_path_buf(),
                revision: revision.to_string(),
            })
    }
}
