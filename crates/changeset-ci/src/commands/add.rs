use std::io::Read as _;
use std::path::Path;

use changeset_operations::operations::{AddInput, AddOperation, AddResult};
use changeset_operations::providers::{FileSystemChangesetIO, FileSystemProjectProvider};
use changeset_project::ConfigOverrides;
use tracing::debug;

use super::AddArgs;
use crate::environment::non_interactive_reason;
use crate::error::{CliError, Result};
use crate::interaction::{NonInteractiveProvider, TerminalInteractionProvider};

pub(super) fn run(args: AddArgs, start_path: &Path, overrides: ConfigOverrides) -> Result<()> {
    let input = build_input(args)?;
    let project_provider = FileSystemProjectProvider::with_overrides(overrides);
    let changeset_writer = FileSystemChangesetIO::new();

    let result = if let Some(reason) = non_interactive_reason() {
        debug!(?reason, "prompts disabled");
        AddOperation::new(project_provider, changeset_writer, NonInteractiveProvider)
            .execute(start_path, input)?
    } else {
        AddOperation::new(
            project_provider,
            changeset_writer,
            TerminalInteractionProvider,
        )
        .execute(start_path, input)?
    };

    match result {
        AddResult::Created {
            file_path,
            bump_type,
            description,
        } => {
            println!("Created changeset: {}", file_path.display());
            println!("  {bump_type}: {}", description.lines().next().unwrap_or_default());
        }
        AddResult::Cancelled => eprintln!("Cancelled; no changeset written"),
    }

    Ok(())
}

fn build_input(args: AddArgs) -> Result<AddInput> {
    let description = match args.message {
        Some(message) if message == "-" => Some(read_description_from_stdin()?),
        other => other,
    };

    Ok(AddInput {
        bump: args.bump,
        description,
    })
}

fn read_description_from_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(CliError::Stdin)?;
    Ok(buffer)
}
