mod changelog;
mod changeset_io;
mod git;
mod manifest;
mod merge_journal_io;
mod project;

pub use changelog::FileSystemChangelogWriter;
pub use changeset_io::FileSystemChangesetIO;
pub use git::Git2Provider;
pub use manifest::FileSystemManifestWriter;
pub use merge_journal_io::{FileSystemMergeJournalIO, JOURNAL_FILENAME};
pub use project::FileSystemProjectProvider;
