use std::path::{Path, PathBuf};

use changeset_project::{
    ChangesetConfig, ConfigOverrides, Project, discover_project, ensure_changeset_dir,
    load_config,
};

use crate::Result;
use crate::traits::ProjectProvider;

#[derive(Debug, Clone, Default)]
pub struct FileSystemProjectProvider {
    overrides: ConfigOverrides,
}

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Command-line values applied on top of the project's config file.
    #[must_use]
    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        Self { overrides }
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn discover_project(&self, start_path: &Path) -> Result<Project> {
        Ok(discover_project(start_path)?)
    }

    fn load_config(&self, project: &Project) -> Result<ChangesetConfig> {
        Ok(load_config(project, &self.overrides)?)
    }

    fn ensure_changeset_dir(
        &self,
        project: &Project,
        config: &ChangesetConfig,
    ) -> Result<PathBuf> {
        Ok(ensure_changeset_dir(project, config)?)
    }
}
