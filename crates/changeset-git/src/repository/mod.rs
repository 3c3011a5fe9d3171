mod blob;
mod diff;
mod remote;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub use remote::DEFAULT_REMOTE;

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner.workdir().ok_or_else(|| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        // Use dunce to get a path without the \\?\ prefix on Windows
        let root = dunce::simplified(root).to_path_buf();

        Ok(Self { inner, root })
    }

    /// Working directory root. Diff paths are relative to it.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn is_revision_available(&self, refspec: &str) -> bool {
        self.inner
            .revparse_single(refspec)
            .and_then(|obj| obj.peel_to_commit())
            .is_ok()
    }

    pub(crate) fn resolve_commit(&self, refspec: &str) -> Result<git2::Commit<'_>> {
        let not_found = || GitError::RefNotFound {
            refspec: refspec.to_string(),
        };

        self.inner
            .revparse_single(refspec)
            .map_err(|_| not_found())?
            .peel_to_commit()
            .map_err(|_| not_found())
    }
}
