use std::path::{Path, PathBuf};

use crate::config::ChangesetConfig;
use crate::error::ProjectError;
use crate::manifest::PackageManifest;
use crate::{DEFAULT_CHANGESET_DIR, MANIFEST_FILENAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILENAME)
    }

    #[must_use]
    pub fn changeset_dir(&self, config: &ChangesetConfig) -> PathBuf {
        self.root.join(config.changeset_dir())
    }

    #[must_use]
    pub fn changelog_path(&self, config: &ChangesetConfig) -> PathBuf {
        self.root.join(config.changelog())
    }

    /// Reads `package.json` if the project has one.
    ///
    /// # Errors
    ///
    /// Returns manifest errors if the file exists but cannot be loaded.
    pub fn read_manifest(&self) -> Result<Option<PackageManifest>, ProjectError> {
        let path = self.manifest_path();
        if !path.is_file() {
            return Ok(None);
        }
        PackageManifest::read(&path).map(Some)
    }
}

/// Walks up from `start_dir` to the first directory holding a `package.json`
/// or a `.changeset` directory.
///
/// # Errors
///
/// Returns `ProjectError::ManifestRead` if `start_dir` cannot be resolved and
/// `ProjectError::NotFound` if no ancestor qualifies.
pub fn discover_project(start_dir: &Path) -> Result<Project, ProjectError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::ManifestRead {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let root = start_dir
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILENAME).is_file() || dir.join(DEFAULT_CHANGESET_DIR).is_dir())
        .ok_or_else(|| ProjectError::NotFound {
            start_dir: start_dir.clone(),
        })?;

    Ok(Project::new(root.to_path_buf()))
}

/// # Errors
///
/// Returns `ProjectError::Io` if directory creation fails.
pub fn ensure_changeset_dir(
    project: &Project,
    config: &ChangesetConfig,
) -> Result<PathBuf, ProjectError> {
    let changeset_dir = project.changeset_dir(config);
    if !changeset_dir.exists() {
        std::fs::create_dir_all(&changeset_dir)?;
    }
    Ok(changeset_dir)
}
