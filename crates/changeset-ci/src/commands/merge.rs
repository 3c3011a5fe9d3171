use std::path::Path;

use changeset_operations::SkippedChangeset;
use changeset_operations::operations::{MergeOperation, MergeOutcome};
use changeset_operations::providers::{
    FileSystemChangesetIO, FileSystemMergeJournalIO, FileSystemProjectProvider,
};
use changeset_project::ConfigOverrides;

use crate::error::Result;
use crate::output::display_name;

pub(super) fn run(start_path: &Path, overrides: ConfigOverrides) -> Result<()> {
    let operation = MergeOperation::new(
        FileSystemProjectProvider::with_overrides(overrides),
        FileSystemChangesetIO::new(),
        FileSystemChangesetIO::new(),
        FileSystemMergeJournalIO::new(),
    );

    match operation.execute(start_path)? {
        MergeOutcome::NoMergeNeeded { pending, skipped } => {
            println!("Nothing to merge ({pending} pending changeset(s))");
            report_skipped(&skipped);
        }
        MergeOutcome::Merged(summary) => {
            println!(
                "Merged {} changeset(s) into {} ({})",
                summary.deleted.len(),
                display_name(&summary.merged_file),
                summary.bump_type
            );
            report_skipped(&summary.skipped);
        }
    }

    Ok(())
}

fn report_skipped(skipped: &[SkippedChangeset]) {
    for changeset in skipped {
        eprintln!(
            "Skipped invalid changeset {}: {}",
            display_name(&changeset.path),
            changeset.reason
        );
    }
}
