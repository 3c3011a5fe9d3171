use std::path::{Path, PathBuf};
use std::time::SystemTime;

use changeset_core::BumpType;
use changeset_parse::{FormatError, parse_changeset};
use changeset_project::ChangesetConfig;

use crate::Result;
use crate::traits::ChangesetReader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    MissingChangeset,
    TooManyChangesets {
        files: Vec<PathBuf>,
    },
    Invalid {
        path: PathBuf,
        reason: FormatError,
    },
    Valid {
        path: PathBuf,
        bump_type: BumpType,
        description: String,
    },
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Checks that exactly one changeset was added and that it parses for the
/// configured package, reading it from the working tree.
///
/// # Errors
///
/// Returns an error if the single added file cannot be read. Parse failures
/// are reported as [`ValidationOutcome::Invalid`].
pub fn validate_added<R: ChangesetReader>(
    files: &[PathBuf],
    reader: &R,
    config: &ChangesetConfig,
) -> Result<ValidationOutcome> {
    validate_added_with(files, config, |path| {
        reader.read_changeset(path).map(|raw| raw.content)
    })
}

/// Like [`validate_added`], with `read` supplying the file's content.
///
/// `read` is called at most once, and only when exactly one file was added.
///
/// # Errors
///
/// Returns whatever error `read` returns.
pub fn validate_added_with<F>(
    files: &[PathBuf],
    config: &ChangesetConfig,
    read: F,
) -> Result<ValidationOutcome>
where
    F: FnOnce(&Path) -> Result<String>,
{
    let path = match files {
        [] => return Ok(ValidationOutcome::MissingChangeset),
        [path] => path,
        _ => {
            return Ok(ValidationOutcome::TooManyChangesets {
                files: files.to_vec(),
            });
        }
    };

    let content = read(path)?;

    // Validation does not depend on file timestamps.
    Ok(
        match parse_changeset(&content, config.package_name(), path, SystemTime::UNIX_EPOCH) {
            Ok(record) => ValidationOutcome::Valid {
                path: record.source_path,
                bump_type: record.bump_type,
                description: record.description,
            },
            Err(reason) => ValidationOutcome::Invalid {
                path: path.clone(),
                reason,
            },
        },
    )
}
