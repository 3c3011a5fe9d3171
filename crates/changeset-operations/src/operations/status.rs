use std::path::Path;

use changeset_core::{BumpType, ChangesetRecord, highest_bump, sort_chronologically};
use changeset_parse::parse_changeset;

use crate::Result;
use crate::traits::{ChangesetReader, ProjectProvider};
use crate::types::SkippedChangeset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOutput {
    pub package_name: String,
    /// Pending changesets that parse, oldest first.
    pub records: Vec<ChangesetRecord>,
    pub invalid: Vec<SkippedChangeset>,
    /// Bump the next release would apply, `None` when nothing is pending.
    pub projected_bump: Option<BumpType>,
}

impl StatusOutput {
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.records.len() + self.invalid.len()
    }
}

pub struct StatusOperation<P, R> {
    project_provider: P,
    changeset_reader: R,
}

impl<P, R> StatusOperation<P, R>
where
    P: ProjectProvider,
    R: ChangesetReader,
{
    pub fn new(project_provider: P, changeset_reader: R) -> Self {
        Self {
            project_provider,
            changeset_reader,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered or if changeset files
    /// cannot be read.
    pub fn execute(&self, start_path: &Path) -> Result<StatusOutput> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self.project_provider.load_config(&project)?;

        let changeset_dir = project.changeset_dir(&config);
        let changeset_files = self
            .changeset_reader
            .list_changesets(&changeset_dir, &config)?;

        let mut records = Vec::new();
        let mut invalid = Vec::new();

        for path in &changeset_files {
            let raw = self.changeset_reader.read_changeset(path)?;
            match parse_changeset(&raw.content, config.package_name(), path, raw.modified_at) {
                Ok(record) => records.push(record),
                Err(reason) => invalid.push(SkippedChangeset {
                    path: path.clone(),
                    reason,
                }),
            }
        }

        sort_chronologically(&mut records);

        let projected_bump =
            (!records.is_empty()).then(|| highest_bump(records.iter().map(|r| r.bump_type)));

        Ok(StatusOutput {
            package_name: config.package_name().to_string(),
            records,
            invalid,
            projected_bump,
        })
    }
}
