use std::path::Path;

use semver::Version;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangelogWriter, ManifestWriter, ProjectProvider};

#[derive(Debug, Clone, Default)]
pub struct ReleaseNotesInput {
    /// Defaults to the manifest's current version.
    pub version: Option<Version>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub version: Version,
    pub body: String,
}

/// Extracts one version's changelog section for use as a release body.
pub struct ReleaseNotesOperation<P, M, C> {
    project_provider: P,
    manifest_writer: M,
    changelog_writer: C,
}

impl<P, M, C> ReleaseNotesOperation<P, M, C>
where
    P: ProjectProvider,
    M: ManifestWriter,
    C: ChangelogWriter,
{
    pub fn new(project_provider: P, manifest_writer: M, changelog_writer: C) -> Self {
        Self {
            project_provider,
            manifest_writer,
            changelog_writer,
        }
    }

    /// # Errors
    ///
    /// Returns [`OperationError::ReleaseNotesNotFound`] if the changelog has no
    /// section for the version, or an error if the manifest or changelog
    /// cannot be read.
    pub fn execute(&self, start_path: &Path, input: ReleaseNotesInput) -> Result<ReleaseNotes> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self.project_provider.load_config(&project)?;

        let version = match input.version {
            Some(version) => version,
            None => self.manifest_writer.read_version(&project.manifest_path())?,
        };

        let changelog_path = project.changelog_path(&config);
        let body = self
            .changelog_writer
            .release_notes(&changelog_path, &version)?
            .ok_or_else(|| OperationError::ReleaseNotesNotFound {
                version: version.clone(),
                path: changelog_path.clone(),
            })?;

        Ok(ReleaseNotes { version, body })
    }
}
