use std::path::Path;

use crate::Result;
use crate::types::MergeJournal;

/// Persistence of the merge journal in the changeset directory.
pub trait MergeJournalIO: Send + Sync {
    /// Returns `Ok(None)` if no journal exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal exists but cannot be read or parsed.
    fn load_journal(&self, changeset_dir: &Path) -> Result<Option<MergeJournal>>;

    /// # Errors
    ///
    /// Returns an error if the journal cannot be written.
    fn save_journal(&self, changeset_dir: &Path, journal: &MergeJournal) -> Result<()>;

    /// Removing a journal that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal cannot be deleted.
    fn remove_journal(&self, changeset_dir: &Path) -> Result<()>;
}
