use std::path::Path;

use tracing::debug;

use super::detect::{ChangeDetector, DetectionStrategy, RevisionContext};
use super::validate::{ValidationOutcome, validate_added, validate_added_with};
use crate::Result;
use crate::traits::{ChangesetReader, GitProvider, ProjectProvider};

#[derive(Debug, Clone, Default)]
pub struct VerifyInput {
    pub base: Option<String>,
    pub head: Option<String>,
}

#[derive(Debug)]
pub struct VerifyOutcome {
    pub strategy: DetectionStrategy,
    pub validation: ValidationOutcome,
}

pub struct VerifyOperation<P, G, R> {
    project_provider: P,
    git_provider: G,
    changeset_reader: R,
}

impl<P, G, R> VerifyOperation<P, G, R>
where
    P: ProjectProvider,
    G: GitProvider,
    R: ChangesetReader,
{
    pub fn new(project_provider: P, git_provider: G, changeset_reader: R) -> Self {
        Self {
            project_provider,
            git_provider,
            changeset_reader,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the project or its configuration cannot be loaded,
    /// the changeset directory cannot be listed, or the added changeset
    /// cannot be read.
    pub fn execute(&self, start_path: &Path, input: &VerifyInput) -> Result<VerifyOutcome> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self.project_provider.load_config(&project)?;

        let revisions = RevisionContext {
            base: input.base.clone(),
            head: input.head.clone(),
            base_branch: config.base_branch().map(String::from),
        };

        let detection = ChangeDetector::new(&self.git_provider, &self.changeset_reader)
            .detect_added(&project, &config, &revisions)?;
        debug!(
            strategy = %detection.strategy,
            count = detection.files.len(),
            "detected added changesets"
        );

        let validation = match &detection.revision {
            Some(revision) => validate_added_with(&detection.files, &config, |path| {
                self.read_committed(project.root(), revision, path)
            })?,
            None => validate_added(&detection.files, &self.changeset_reader, &config)?,
        };

        Ok(VerifyOutcome {
            strategy: detection.strategy,
            validation,
        })
    }

    /// The file as committed in `revision`, or the working tree copy when the
    /// revision's tree lacks it.
    fn read_committed(&self, root: &Path, revision: &str, path: &Path) -> Result<String> {
        if let Some(content) = self.git_provider.read_file_at(root, revision, path)? {
            return Ok(content);
        }
        debug!(
            %revision,
            path = %path.display(),
            "changeset not in revision tree, reading working tree"
        );
        Ok(self.changeset_reader.read_changeset(path)?.content)
    }
}
