use std::path::Path;

use changeset_operations::operations::{VersionInput, VersionOperation, VersionOutcome};
use changeset_operations::providers::{
    FileSystemChangelogWriter, FileSystemChangesetIO, FileSystemManifestWriter,
    FileSystemProjectProvider,
};
use changeset_project::ConfigOverrides;

use super::VersionArgs;
use crate::error::Result;

pub(super) fn run(args: VersionArgs, start_path: &Path, overrides: ConfigOverrides) -> Result<()> {
    let operation = VersionOperation::new(
        FileSystemProjectProvider::with_overrides(overrides),
        FileSystemChangesetIO::new(),
        FileSystemChangesetIO::new(),
        FileSystemManifestWriter::new(),
        FileSystemChangelogWriter::new(),
    );

    let input = VersionInput {
        dry_run: args.dry_run,
    };

    match operation.execute(start_path, input)? {
        VersionOutcome::NoChangesets => println!("No pending changesets; nothing to version"),
        VersionOutcome::Applied(summary) if summary.dry_run => {
            println!(
                "Would bump {} -> {} ({}) from {} changeset(s)",
                summary.previous_version,
                summary.new_version,
                summary.bump_type,
                summary.consumed.len()
            );
        }
        VersionOutcome::Applied(summary) => {
            println!(
                "Bumped {} -> {} ({})",
                summary.previous_version, summary.new_version, summary.bump_type
            );
            let verb = if summary.changelog_created {
                "Created"
            } else {
                "Updated"
            };
            println!("{verb} {}", summary.changelog_path.display());
            println!("Consumed {} changeset(s)", summary.consumed.len());
        }
    }

    Ok(())
}
