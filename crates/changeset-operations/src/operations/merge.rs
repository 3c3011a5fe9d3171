use std::path::{Path, PathBuf};

use changeset_core::{BumpType, ChangesetRecord, merge_records};
use changeset_parse::{parse_changeset, serialize_changeset};
use changeset_project::ChangesetConfig;
use tracing::{debug, info, warn};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangesetReader, ChangesetWriter, MergeJournalIO, ProjectProvider};
use crate::types::{MergeJournal, SkippedChangeset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub merged_file: PathBuf,
    pub bump_type: BumpType,
    pub description_count: usize,
    pub deleted: Vec<PathBuf>,
    pub skipped: Vec<SkippedChangeset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// At most one valid changeset is pending; no file was touched.
    NoMergeNeeded {
        pending: usize,
        skipped: Vec<SkippedChangeset>,
    },
    Merged(MergeSummary),
}

/// Collapses every pending changeset into one.
///
/// A journal written before the merged file and removed after the sources
/// are gone lets the next run finish a merge that was interrupted between
/// those two points.
pub struct MergeOperation<P, R, W, J> {
    project_provider: P,
    changeset_reader: R,
    changeset_writer: W,
    journal_io: J,
}

impl<P, R, W, J> MergeOperation<P, R, W, J>
where
    P: ProjectProvider,
    R: ChangesetReader,
    W: ChangesetWriter,
    J: MergeJournalIO,
{
    pub fn new(project_provider: P, changeset_reader: R, changeset_writer: W, journal_io: J) -> Self {
        Self {
            project_provider,
            changeset_reader,
            changeset_writer,
            journal_io,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the project cannot be loaded, the changeset
    /// directory cannot be listed, any pending file cannot be read, no pending
    /// file parses, or the merged file cannot be written or a source deleted.
    pub fn execute(&self, start_path: &Path) -> Result<MergeOutcome> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self.project_provider.load_config(&project)?;
        let changeset_dir = project.changeset_dir(&config);

        self.recover_interrupted_merge(&changeset_dir)?;

        let files = self
            .changeset_reader
            .list_changesets(&changeset_dir, &config)?;
        if files.len() <= 1 {
            debug!(pending = files.len(), "nothing to merge");
            return Ok(MergeOutcome::NoMergeNeeded {
                pending: files.len(),
                skipped: Vec::new(),
            });
        }

        let (records, skipped) = self.parse_all(&files, &config)?;
        if records.len() == 1 {
            debug!(skipped = skipped.len(), "only one valid changeset, nothing to merge");
            return Ok(MergeOutcome::NoMergeNeeded {
                pending: 1,
                skipped,
            });
        }

        let Some(result) = merge_records(records) else {
            return Err(OperationError::NoValidChangesets { skipped });
        };

        let filename = self
            .changeset_writer
            .unique_filename(&changeset_dir, config.extension());
        let merged_file = changeset_dir.join(&filename);

        self.journal_io
            .save_journal(&changeset_dir, &MergeJournal::new(&filename, &result.sources))?;

        let content = serialize_changeset(
            config.package_name(),
            result.highest_bump,
            &result.combined_description,
        );
        self.changeset_writer
            .write_changeset(&merged_file, &content)?;

        for source in &result.sources {
            self.changeset_writer.delete_changeset(source)?;
        }
        self.journal_io.remove_journal(&changeset_dir)?;

        info!(
            merged = %merged_file.display(),
            bump = %result.highest_bump,
            merged_count = result.sources.len(),
            skipped_count = skipped.len(),
            "merged changesets"
        );

        Ok(MergeOutcome::Merged(MergeSummary {
            merged_file,
            bump_type: result.highest_bump,
            description_count: result.description_count,
            deleted: result.sources,
            skipped,
        }))
    }

    fn parse_all(
        &self,
        files: &[PathBuf],
        config: &ChangesetConfig,
    ) -> Result<(Vec<ChangesetRecord>, Vec<SkippedChangeset>)> {
        let mut records = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for path in files {
            let raw = self.changeset_reader.read_changeset(path)?;
            match parse_changeset(&raw.content, config.package_name(), path, raw.modified_at) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "skipping invalid changeset");
                    skipped.push(SkippedChangeset {
                        path: path.clone(),
                        reason,
                    });
                }
            }
        }

        Ok((records, skipped))
    }

    fn recover_interrupted_merge(&self, changeset_dir: &Path) -> Result<()> {
        let removed = self.changeset_writer.remove_temp_files(changeset_dir)?;
        if removed > 0 {
            warn!(count = removed, "removed temporary files left by an interrupted write");
        }

        let Some(journal) = self.journal_io.load_journal(changeset_dir)? else {
            return Ok(());
        };

        if self
            .changeset_writer
            .filename_exists(changeset_dir, &journal.merged_file)
        {
            warn!(
                merged = %journal.merged_path(changeset_dir).display(),
                "completing interrupted merge"
            );
            for (name, path) in journal.sources.iter().zip(journal.source_paths(changeset_dir)) {
                if self.changeset_writer.filename_exists(changeset_dir, name) {
                    self.changeset_writer.delete_changeset(&path)?;
                }
            }
        } else {
            warn!("discarding journal of a merge that never wrote its output");
        }

        self.journal_io.remove_journal(changeset_dir)
    }
}
