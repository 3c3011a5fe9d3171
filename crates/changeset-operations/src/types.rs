use std::path::{Path, PathBuf};
use std::time::SystemTime;

use changeset_parse::FormatError;
use serde::{Deserialize, Serialize};

/// Unparsed contents of a changeset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChangeset {
    pub path: PathBuf,
    pub content: String,
    pub modified_at: SystemTime,
}

/// A pending changeset that failed to parse and was left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChangeset {
    pub path: PathBuf,
    pub reason: FormatError,
}

/// Record of a merge in progress, stored next to the changesets.
///
/// Names are relative to the changeset directory. The journal exists from
/// just before the merged file is written until every source is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeJournal {
    pub merged_file: String,
    pub sources: Vec<String>,
}

impl MergeJournal {
    #[must_use]
    pub fn new(merged_file: impl Into<String>, sources: &[PathBuf]) -> Self {
        Self {
            merged_file: merged_file.into(),
            sources: sources
                .iter()
                .filter_map(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect(),
        }
    }

    #[must_use]
    pub fn merged_path(&self, changeset_dir: &Path) -> PathBuf {
        changeset_dir.join(&self.merged_file)
    }

    pub fn source_paths<'a>(&'a self, changeset_dir: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.sources.iter().map(|name| changeset_dir.join(name))
    }
}
