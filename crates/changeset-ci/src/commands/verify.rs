use std::path::Path;

use changeset_operations::operations::{ValidationOutcome, VerifyInput, VerifyOperation};
use changeset_operations::providers::{
    FileSystemChangesetIO, FileSystemProjectProvider, Git2Provider,
};
use changeset_project::ConfigOverrides;

use super::{VerifyArgs, non_empty};
use crate::error::{CliError, Result};
use crate::output::{PlainTextVerifyFormatter, VerifyFormatter};

pub(super) fn run(args: VerifyArgs, start_path: &Path, overrides: ConfigOverrides) -> Result<()> {
    let operation = VerifyOperation::new(
        FileSystemProjectProvider::with_overrides(overrides),
        Git2Provider::new(),
        FileSystemChangesetIO::new(),
    );

    let input = VerifyInput {
        base: non_empty(args.base),
        head: non_empty(args.head),
    };

    let outcome = operation.execute(start_path, &input)?;
    let formatter = PlainTextVerifyFormatter;

    let reason = match &outcome.validation {
        ValidationOutcome::Valid { .. } => {
            print!("{}", formatter.format_success(&outcome));
            return Ok(());
        }
        ValidationOutcome::MissingChangeset => "missing changeset",
        ValidationOutcome::TooManyChangesets { .. } => "more than one changeset added",
        ValidationOutcome::Invalid { .. } => "invalid changeset",
    };

    eprint!("{}", formatter.format_failure(&outcome));
    Err(CliError::VerificationFailed { reason })
}
