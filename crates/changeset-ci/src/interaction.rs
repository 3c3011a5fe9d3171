use std::io::BufRead;

use changeset_core::BumpType;
use changeset_operations::traits::{BumpSelection, DescriptionInput, InteractionProvider};
use changeset_operations::{OperationError, Result};
use dialoguer::Select;

static BUMP_CHOICES: [(BumpType, &str); 3] = [
    (BumpType::Patch, "patch - Bug fixes (backwards compatible)"),
    (BumpType::Minor, "minor - New features (backwards compatible)"),
    (BumpType::Major, "major - Breaking changes"),
];

pub struct TerminalInteractionProvider;

impl InteractionProvider for TerminalInteractionProvider {
    fn select_bump_type(&self, package_name: &str) -> Result<BumpSelection> {
        let items = BUMP_CHOICES.map(|(_, label)| label);

        let selection = Select::new()
            .with_prompt(format!("Select bump type for '{package_name}'"))
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| match e {
                dialoguer::Error::IO(io_err) => OperationError::Interaction(io_err),
            })?;

        Ok(selection
            .and_then(|index| BUMP_CHOICES.get(index))
            .map_or(BumpSelection::Cancelled, |(bump, _)| {
                BumpSelection::Selected(*bump)
            }))
    }

    fn get_description(&self) -> Result<DescriptionInput> {
        eprintln!();
        eprintln!("Enter description (press Enter twice on an empty line to finish):");
        eprintln!();

        let stdin = std::io::stdin();
        read_description(stdin.lock()).map_err(OperationError::Interaction)
    }
}

/// Reads lines until two consecutive empty lines or end of input.
fn read_description(mut input: impl BufRead) -> std::io::Result<DescriptionInput> {
    let mut lines = Vec::new();
    let mut empty_line_count = 0;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            empty_line_count += 1;
            if empty_line_count >= 2 {
                break;
            }
            lines.push(String::new());
        } else {
            empty_line_count = 0;
            lines.push(trimmed.to_string());
        }
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    if lines.is_empty() {
        return Ok(DescriptionInput::Cancelled);
    }

    Ok(DescriptionInput::Provided(lines.join("\n")))
}

/// Used in CI and pipes, where every value must come from flags.
pub struct NonInteractiveProvider;

impl InteractionProvider for NonInteractiveProvider {
    fn select_bump_type(&self, _package_name: &str) -> Result<BumpSelection> {
        Err(OperationError::InteractionRequired { what: "--bump" })
    }

    fn get_description(&self) -> Result<DescriptionInput> {
        Err(OperationError::InteractionRequired { what: "--message" })
    }
}
