use std::path::{Path, PathBuf};

use changeset_core::BumpType;
use changeset_parse::serialize_changeset;
use tracing::info;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    BumpSelection, ChangesetWriter, DescriptionInput, InteractionProvider, ProjectProvider,
};

/// Values supplied up front; anything missing is asked for interactively.
#[derive(Debug, Clone, Default)]
pub struct AddInput {
    pub bump: Option<BumpType>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddResult {
    Created {
        file_path: PathBuf,
        bump_type: BumpType,
        description: String,
    },
    Cancelled,
}

pub struct AddOperation<P, W, I> {
    project_provider: P,
    changeset_writer: W,
    interaction_provider: I,
}

impl<P, W, I> AddOperation<P, W, I>
where
    P: ProjectProvider,
    W: ChangesetWriter,
    I: InteractionProvider,
{
    pub fn new(project_provider: P, changeset_writer: W, interaction_provider: I) -> Self {
        Self {
            project_provider,
            changeset_writer,
            interaction_provider,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the project cannot be loaded, the description is
    /// blank, or the changeset cannot be written.
    pub fn execute(&self, start_path: &Path, input: AddInput) -> Result<AddResult> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self.project_provider.load_config(&project)?;

        let bump_type = match input.bump {
            Some(bump) => bump,
            None => match self
                .interaction_provider
                .select_bump_type(config.package_name())?
            {
                BumpSelection::Selected(bump) => bump,
                BumpSelection::Cancelled => return Ok(AddResult::Cancelled),
            },
        };

        let description = match input.description {
            Some(description) => description,
            None => match self.interaction_provider.get_description()? {
                DescriptionInput::Provided(description) => description,
                DescriptionInput::Cancelled => return Ok(AddResult::Cancelled),
            },
        };

        let description = description.trim();
        if description.is_empty() {
            return Err(OperationError::EmptyDescription);
        }

        let changeset_dir = self
            .project_provider
            .ensure_changeset_dir(&project, &config)?;
        let filename = self
            .changeset_writer
            .unique_filename(&changeset_dir, config.extension());
        let file_path = changeset_dir.join(filename);

        let content = serialize_changeset(config.package_name(), bump_type, description);
        self.changeset_writer.write_changeset(&file_path, &content)?;

        info!(path = %file_path.display(), bump = %bump_type, "created changeset");

        Ok(AddResult::Created {
            file_path,
            bump_type,
            description: description.to_string(),
        })
    }
}
