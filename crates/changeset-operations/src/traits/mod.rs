mod changelog_writer;
mod changeset_io;
mod git_provider;
mod interaction;
mod manifest_writer;
mod merge_journal_io;
mod project_provider;

pub use changelog_writer::{ChangelogWriter, PreparedChangelog};
pub use changeset_io::{ChangesetReader, ChangesetWriter};
pub use git_provider::GitProvider;
pub use interaction::{BumpSelection, DescriptionInput, InteractionProvider};
pub use manifest_writer::ManifestWriter;
pub use merge_journal_io::MergeJournalIO;
pub use project_provider::ProjectProvider;
