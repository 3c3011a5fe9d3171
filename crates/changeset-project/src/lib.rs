mod config;
mod error;
mod manifest;
mod project;

pub const DEFAULT_CHANGESET_DIR: &str = ".changeset";
pub const DEFAULT_RESERVED_FILE: &str = "README.md";
pub const DEFAULT_EXTENSION: &str = "md";
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";
pub const CONFIG_FILENAME: &str = "config.json";
pub const MANIFEST_FILENAME: &str = "package.json";

pub use config::{ChangesetConfig, ConfigOverrides, load_config};
pub use error::ProjectError;
pub use manifest::PackageManifest;
pub use project::{Project, discover_project, ensure_changeset_dir};

pub type Result<T> = std::result::Result<T, ProjectError>;
