use std::path::Path;

use changeset_git::{DEFAULT_REMOTE, FileChange, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn changed_files(
        &self,
        project_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        let repo = Repository::open(project_root)?;
        let root = repo.root().to_path_buf();

        Ok(repo
            .changed_files(base, head)?
            .into_iter()
            .map(|change| FileChange {
                path: root.join(&change.path),
                old_path: change.old_path.map(|old| root.join(old)),
                status: change.status,
            })
            .collect())
    }

    fn is_revision_available(&self, project_root: &Path, revision: &str) -> Result<bool> {
        let repo = Repository::open(project_root)?;
        Ok(repo.is_revision_available(revision))
    }

    fn fetch_branch(&self, project_root: &Path, branch: &str) -> Result<()> {
        let repo = Repository::open(project_root)?;
        Ok(repo.fetch_branch(DEFAULT_REMOTE, branch)?)
    }

    fn fetch_revision(&self, project_root: &Path, revision: &str) -> Result<()> {
        let repo = Repository::open(project_root)?;
        Ok(repo.fetch_revision(DEFAULT_REMOTE, revision)?)
    }

    fn read_file_at(
        &self,
        project_root: &Path,
        revision: &str,
        path: &Path,
    ) -> Result<Option<String>> {
        let repo = Repository::open(project_root)?;
        let Ok(relative) = path.strip_prefix(repo.root()) else {
            return Ok(None);
        };
        Ok(repo.read_file(revision, relative)?)
    }
}
