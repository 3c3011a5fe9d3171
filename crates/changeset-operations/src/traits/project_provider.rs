use std::path::{Path, PathBuf};

use changeset_project::{ChangesetConfig, Project};

use crate::Result;

pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no project can be found from the given path.
    fn discover_project(&self, start_path: &Path) -> Result<Project>;

    /// # Errors
    ///
    /// Returns an error if the configuration cannot be resolved.
    fn load_config(&self, project: &Project) -> Result<ChangesetConfig>;

    /// # Errors
    ///
    /// Returns an error if the changeset directory cannot be created.
    fn ensure_changeset_dir(&self, project: &Project, config: &ChangesetConfig)
    -> Result<PathBuf>;
}
