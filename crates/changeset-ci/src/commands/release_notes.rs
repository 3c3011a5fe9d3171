use std::path::Path;

use changeset_operations::operations::{ReleaseNotesInput, ReleaseNotesOperation};
use changeset_operations::providers::{
    FileSystemChangelogWriter, FileSystemManifestWriter, FileSystemProjectProvider,
};
use changeset_project::ConfigOverrides;

use super::ReleaseNotesArgs;
use crate::error::Result;

pub(super) fn run(
    args: ReleaseNotesArgs,
    start_path: &Path,
    overrides: ConfigOverrides,
) -> Result<()> {
    let operation = ReleaseNotesOperation::new(
        FileSystemProjectProvider::with_overrides(overrides),
        FileSystemManifestWriter::new(),
        FileSystemChangelogWriter::new(),
    );

    let notes = operation.execute(
        start_path,
        ReleaseNotesInput {
            version: args.version,
        },
    )?;

    println!("{}", notes.body);

    Ok(())
}
