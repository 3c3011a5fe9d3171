use std::fmt;
use std::path::{Path, PathBuf};

use changeset_git::{DEFAULT_REMOTE, FileChange, FileStatus};
use changeset_project::{ChangesetConfig, Project};
use tracing::{debug, warn};

use crate::Result;
use crate::traits::{ChangesetReader, GitProvider};

const HEAD: &str = "HEAD";

/// Revisions describing the pull request under test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionContext {
    pub base: Option<String>,
    pub head: Option<String>,
    pub base_branch: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStrategy {
    RevisionPair,
    BaseBranch,
    DirectorySnapshot,
}

impl fmt::Display for DetectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RevisionPair => "revision pair",
            Self::BaseBranch => "base branch",
            Self::DirectorySnapshot => "directory snapshot",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub files: Vec<PathBuf>,
    pub strategy: DetectionStrategy,
    /// Revision whose tree holds `files`; `None` means the working tree.
    pub revision: Option<String>,
}

/// Finds the changeset files a pull request adds.
///
/// Strategies are tried from most to least precise. A strategy that runs to
/// completion is final even when it finds nothing; only a strategy that
/// cannot produce a list hands over to the next one.
pub struct ChangeDetector<'a, G, R> {
    git_provider: &'a G,
    changeset_reader: &'a R,
}

impl<'a, G, R> ChangeDetector<'a, G, R>
where
    G: GitProvider,
    R: ChangesetReader,
{
    pub fn new(git_provider: &'a G, changeset_reader: &'a R) -> Self {
        Self {
            git_provider,
            changeset_reader,
        }
    }

    /// # Errors
    ///
    /// Returns an error only if the final directory snapshot cannot be taken.
    pub fn detect_added(
        &self,
        project: &Project,
        config: &ChangesetConfig,
        revisions: &RevisionContext,
    ) -> Result<Detection> {
        let changeset_dir = project.changeset_dir(config);

        if let (Some(base), Some(head)) = (&revisions.base, &revisions.head) {
            match self.from_revision_pair(project.root(), base, head) {
                Ok(Some(changes)) => {
                    return Ok(Detection {
                        files: filter_added(changes, &changeset_dir, config),
                        strategy: DetectionStrategy::RevisionPair,
                        revision: Some(head.clone()),
                    });
                }
                Ok(None) => debug!(%base, "base revision unavailable, falling back"),
                Err(e) => warn!(%base, %head, error = %e, "revision diff failed, falling back"),
            }
        }

        if let Some(branch) = &revisions.base_branch {
            match self.from_base_branch(project.root(), branch) {
                Ok(Some(changes)) => {
                    return Ok(Detection {
                        files: filter_added(changes, &changeset_dir, config),
                        strategy: DetectionStrategy::BaseBranch,
                        revision: Some(HEAD.to_string()),
                    });
                }
                Ok(None) => debug!(%branch, "base branch unavailable, falling back"),
                Err(e) => warn!(%branch, error = %e, "base branch diff failed, falling back"),
            }
        }

        warn!(
            dir = %changeset_dir.display(),
            "no usable revisions; treating every changeset in the directory as added, which may include changesets from earlier pull requests"
        );
        let files = self
            .changeset_reader
            .list_changesets(&changeset_dir, config)?;

        Ok(Detection {
            files,
            strategy: DetectionStrategy::DirectorySnapshot,
            revision: None,
        })
    }

    fn from_revision_pair(
        &self,
        root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Option<Vec<FileChange>>> {
        if !self.git_provider.is_revision_available(root, base)? {
            debug!(%base, "fetching base revision");
            if let Err(e) = self.git_provider.fetch_revision(root, base) {
                warn!(%base, error = %e, "failed to fetch base revision");
            }
            if !self.git_provider.is_revision_available(root, base)? {
                return Ok(None);
            }
        }

        debug!(%base, %head, "diffing revision pair");
        self.git_provider.changed_files(root, base, head).map(Some)
    }

    fn from_base_branch(&self, root: &Path, branch: &str) -> Result<Option<Vec<FileChange>>> {
        if let Err(e) = self.git_provider.fetch_branch(root, branch) {
            warn!(%branch, error = %e, "failed to fetch base branch");
        }

        let remote_ref = format!("{DEFAULT_REMOTE}/{branch}");
        let base = if self.git_provider.is_revision_available(root, &remote_ref)? {
            remote_ref
        } else if self.git_provider.is_revision_available(root, branch)? {
            branch.to_string()
        } else {
            return Ok(None);
        };

        debug!(%base, "diffing against base branch");
        self.git_provider.changed_files(root, &base, HEAD).map(Some)
    }
}

/// Newly added changeset files directly inside `changeset_dir`.
fn filter_added(
    changes: Vec<FileChange>,
    changeset_dir: &Path,
    config: &ChangesetConfig,
) -> Vec<PathBuf> {
    changes
        .into_iter()
        .filter(|change| change.status == FileStatus::Added)
        .filter(|change| change.path.parent() == Some(changeset_dir))
        .filter(|change| config.is_changeset_file(&change.path))
        .map(|change| change.path)
        .collect()
}
