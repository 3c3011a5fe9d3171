use std::path::Path;

use changeset_operations::operations::StatusOperation;
use changeset_operations::providers::{FileSystemChangesetIO, FileSystemProjectProvider};
use changeset_project::ConfigOverrides;

use crate::error::Result;
use crate::output::{PlainTextStatusFormatter, StatusFormatter};

pub(super) fn run(start_path: &Path, overrides: ConfigOverrides) -> Result<()> {
    let operation = StatusOperation::new(
        FileSystemProjectProvider::with_overrides(overrides),
        FileSystemChangesetIO::new(),
    );
    let output = operation.execute(start_path)?;

    print!("{}", PlainTextStatusFormatter.format_status(&output));

    Ok(())
}
