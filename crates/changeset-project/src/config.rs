use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ProjectError;
use crate::project::Project;
use crate::{
    CONFIG_FILENAME, DEFAULT_CHANGELOG, DEFAULT_CHANGESET_DIR, DEFAULT_EXTENSION,
    DEFAULT_RESERVED_FILE,
};

/// Values from `<changeset-dir>/config.json`.
///
/// Only the keys read here are modeled; anything else in the file is
/// accepted and ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    package_name: Option<String>,
    reserved_file: Option<String>,
    extension: Option<String>,
    base_branch: Option<String>,
    changelog: Option<PathBuf>,
}

/// Command-line values layered over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub package_name: Option<String>,
    pub changeset_dir: Option<PathBuf>,
    pub base_branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangesetConfig {
    package_name: String,
    changeset_dir: PathBuf,
    reserved_file: String,
    extension: String,
    base_branch: Option<String>,
    changelog: PathBuf,
}

impl ChangesetConfig {
    /// A configuration with defaults for everything but the package name.
    #[must_use]
    pub fn new(package_name: impl Into<String>, changeset_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_name: package_name.into(),
            changeset_dir: changeset_dir.into(),
            reserved_file: DEFAULT_RESERVED_FILE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            base_branch: None,
            changelog: PathBuf::from(DEFAULT_CHANGELOG),
        }
    }

    #[must_use]
    pub fn with_reserved_file(mut self, reserved_file: impl Into<String>) -> Self {
        self.reserved_file = reserved_file.into();
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    #[must_use]
    pub fn with_base_branch(mut self, base_branch: impl Into<String>) -> Self {
        self.base_branch = Some(base_branch.into());
        self
    }

    #[must_use]
    pub fn with_changelog(mut self, changelog: impl Into<PathBuf>) -> Self {
        self.changelog = changelog.into();
        self
    }

    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Changeset directory, relative to the project root unless absolute.
    #[must_use]
    pub fn changeset_dir(&self) -> &Path {
        &self.changeset_dir
    }

    #[must_use]
    pub fn reserved_file(&self) -> &str {
        &self.reserved_file
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[must_use]
    pub fn base_branch(&self) -> Option<&str> {
        self.base_branch.as_deref()
    }

    #[must_use]
    pub fn changelog(&self) -> &Path {
        &self.changelog
    }

    /// True when `path` names a changeset file by its file name alone: the
    /// configured extension, and not the reserved file.
    #[must_use]
    pub fn is_changeset_file(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if file_name == self.reserved_file {
            return false;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension)
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ProjectError> {
    if !path.is_file() {
        return Ok(ConfigFile::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ProjectError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the effective configuration for `project`.
///
/// Sources are layered `package.json`, then `config.json`, then `overrides`,
/// with later sources winning.
///
/// # Errors
///
/// Returns `ProjectError::ConfigRead`/`ConfigParse` if the config file exists
/// but cannot be loaded, manifest errors if `package.json` must be consulted
/// and is unreadable, and `ProjectError::MissingPackageName` if no source
/// names the package.
pub fn load_config(
    project: &Project,
    overrides: &ConfigOverrides,
) -> Result<ChangesetConfig, ProjectError> {
    let changeset_dir = overrides
        .changeset_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGESET_DIR));

    let file = read_config_file(&project.root().join(&changeset_dir).join(CONFIG_FILENAME))?;

    let package_name = match overrides.package_name.clone().or(file.package_name) {
        Some(name) => name,
        None => project
            .read_manifest()?
            .and_then(|manifest| manifest.name().map(String::from))
            .ok_or_else(|| ProjectError::MissingPackageName {
                root: project.root().to_path_buf(),
            })?,
    };

    let mut config = ChangesetConfig::new(package_name, changeset_dir);
    if let Some(reserved_file) = file.reserved_file {
        config = config.with_reserved_file(reserved_file);
    }
    if let Some(extension) = file.extension {
        config = config.with_extension(extension);
    }
    if let Some(changelog) = file.changelog {
        config = config.with_changelog(changelog);
    }
    if let Some(base_branch) = overrides.base_branch.clone().or(file.base_branch) {
        config = config.with_base_branch(base_branch);
    }

    Ok(config)
}
