use std::path::PathBuf;

use semver::Version;
use thiserror::Error;

use crate::types::SkippedChangeset;

/// A rollback step that failed after a versioning step had already failed.
#[derive(Debug)]
pub struct RollbackFailure {
    pub step: &'static str,
    pub error: Box<OperationError>,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] changeset_git::GitError),

    #[error(transparent)]
    Project(#[from] changeset_project::ProjectError),

    #[error(transparent)]
    Changelog(#[from] changeset_changelog::ChangelogError),

    #[error("failed to read changeset file '{path}'")]
    ChangesetFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write changeset file '{path}'")]
    ChangesetFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete changeset file '{path}'")]
    ChangesetFileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list changeset files in '{path}'")]
    ChangesetList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read merge journal '{path}'")]
    JournalRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse merge journal '{path}'")]
    JournalParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize merge journal for '{path}'")]
    JournalSerialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    #[error("failed to write merge journal '{path}'")]
    JournalWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("none of the {} pending changesets could be parsed", skipped.len())]
    NoValidChangesets { skipped: Vec<SkippedChangeset> },

    #[error("{} pending changeset(s) are invalid: {}", invalid.len(), format_paths(invalid))]
    InvalidChangesets { invalid: Vec<SkippedChangeset> },

    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("{what} must be given on the command line when not running interactively")]
    InteractionRequired { what: &'static str },

    #[error("terminal interaction failed")]
    Interaction(#[source] std::io::Error),

    #[error("no section for version {version} in changelog '{path}'")]
    ReleaseNotesNotFound { version: Version, path: PathBuf },

    #[error("failed to {step}; earlier release changes were undone")]
    VersionFailed {
        step: &'static str,
        #[source]
        source: Box<OperationError>,
    },

    #[error(
        "failed to {step} and {} rollback step(s) also failed; the release is partially applied",
        rollback_failures.len()
    )]
    VersionRollbackFailed {
        step: &'static str,
        #[source]
        source: Box<OperationError>,
        rollback_failures: Vec<RollbackFailure>,
    },
}

fn format_paths(changesets: &[SkippedChangeset]) -> String {
    changesets
        .iter()
        .map(|c| c.path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, OperationError>;
