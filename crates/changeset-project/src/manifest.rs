use std::path::{Path, PathBuf};

use semver::Version;
use serde_json::{Map, Value};

use crate::error::ProjectError;

/// A `package.json` document.
///
/// Unknown fields and key order survive a read/write cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// # Errors
    ///
    /// Returns `ProjectError::ManifestRead` if the file cannot be read,
    /// `ProjectError::ManifestParse` if it is not valid JSON and
    /// `ProjectError::ManifestNotObject` if the top level is not an object.
    pub fn read(path: &Path) -> Result<Self, ProjectError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &content)
    }

    /// # Errors
    ///
    /// Returns `ProjectError::ManifestParse` or `ProjectError::ManifestNotObject`
    /// if `content` is not a JSON object.
    pub fn from_json(path: &Path, content: &str) -> Result<Self, ProjectError> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| ProjectError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        let Value::Object(fields) = value else {
            return Err(ProjectError::ManifestNotObject {
                path: path.to_path_buf(),
            });
        };

        Ok(Self {
            path: path.to_path_buf(),
            fields,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `name` field, if present and a non-empty string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// # Errors
    ///
    /// Returns `ProjectError::MissingField` if there is no string `version`
    /// and `ProjectError::InvalidVersion` if it is not valid semver.
    pub fn version(&self) -> Result<Version, ProjectError> {
        let raw = self
            .fields
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| ProjectError::MissingField {
                path: self.path.clone(),
                field: "version",
            })?;

        raw.parse().map_err(|source| ProjectError::InvalidVersion {
            path: self.path.clone(),
            version: raw.to_string(),
            source,
        })
    }

    pub fn set_version(&mut self, version: &Version) {
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    /// Renders the manifest with two-space indentation and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::ManifestParse` if serialization fails.
    pub fn render(&self) -> Result<String, ProjectError> {
        let mut rendered = serde_json::to_string_pretty(&self.fields).map_err(|source| {
            ProjectError::ManifestParse {
                path: self.path.clone(),
                source,
            }
        })?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// # Errors
    ///
    /// Returns `ProjectError::ManifestWrite` if the file cannot be written.
    pub fn write(&self) -> Result<(), ProjectError> {
        let rendered = self.render()?;
        std::fs::write(&self.path, rendered).map_err(|source| ProjectError::ManifestWrite {
            path: self.path.clone(),
            source,
        })
    }
}
