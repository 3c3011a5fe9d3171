use std::fs;
use std::path::Path;

use crate::Result;
use crate::error::OperationError;
use crate::traits::MergeJournalIO;
use crate::types::MergeJournal;

pub const JOURNAL_FILENAME: &str = "merge-journal.toml";

pub struct FileSystemMergeJournalIO;

impl FileSystemMergeJournalIO {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemMergeJournalIO {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeJournalIO for FileSystemMergeJournalIO {
    fn load_journal(&self, changeset_dir: &Path) -> Result<Option<MergeJournal>> {
        let path = changeset_dir.join(JOURNAL_FILENAME);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| OperationError::JournalRead {
            path: path.clone(),
            source,
        })?;

        let journal =
            toml::from_str(&content).map_err(|source| OperationError::JournalParse {
                path: path.clone(),
                source,
            })?;

        Ok(Some(journal))
    }

    fn save_journal(&self, changeset_dir: &Path, journal: &MergeJournal) -> Result<()> {
        let path = changeset_dir.join(JOURNAL_FILENAME);

        let content =
            toml::to_string_pretty(journal).map_err(|source| OperationError::JournalSerialize {
                path: path.clone(),
                source,
            })?;

        fs::write(&path, content).map_err(|source| OperationError::JournalWrite { path, source })
    }

    fn remove_journal(&self, changeset_dir: &Path) -> Result<()> {
        let path = changeset_dir.join(JOURNAL_FILENAME);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(OperationError::JournalWrite { path, source }),
        }
    }
}
