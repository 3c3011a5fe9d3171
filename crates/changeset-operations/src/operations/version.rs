use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use changeset_changelog::{ChangelogEntry, VersionRelease};
use changeset_core::{BumpType, highest_bump, sort_chronologically};
use changeset_parse::parse_changeset;
use changeset_version::bump_version;
use semver::Version;
use tracing::{debug, info, warn};

use crate::Result;
use crate::error::{OperationError, RollbackFailure};
use crate::traits::{
    ChangelogWriter, ChangesetReader, ChangesetWriter, ManifestWriter, PreparedChangelog,
    ProjectProvider,
};
use crate::types::SkippedChangeset;

#[derive(Debug, Clone, Copy, Default)]
pub struct VersionInput {
    /// Compute the release without touching any file.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSummary {
    pub previous_version: Version,
    pub new_version: Version,
    pub bump_type: BumpType,
    pub changelog_path: PathBuf,
    pub changelog_created: bool,
    pub consumed: Vec<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionOutcome {
    NoChangesets,
    Applied(VersionSummary),
}

/// Everything a release writes, computed before the first write.
struct ReleasePlan<'a> {
    manifest_path: &'a Path,
    previous_version: &'a Version,
    new_version: &'a Version,
    changelog: &'a PreparedChangelog,
    consumed: &'a [PathBuf],
    originals: &'a BTreeMap<PathBuf, String>,
}

/// Steps of a release that completed and must be undone on failure.
#[derive(Default)]
struct Applied {
    changelog: bool,
    deleted: usize,
}

/// Turns pending changesets into a version bump and a changelog section.
///
/// The manifest, the changelog and the consumed changesets change together:
/// when a write fails, the steps already applied are undone so a rerun
/// starts from the same pending changesets and the same version.
pub struct VersionOperation<P, R, W, M, C> {
    project_provider: P,
    changeset_reader: R,
    changeset_writer: W,
    manifest_writer: M,
    changelog_writer: C,
}

impl<P, R, W, M, C> VersionOperation<P, R, W, M, C>
where
    P: ProjectProvider,
    R: ChangesetReader,
    W: ChangesetWriter,
    M: ManifestWriter,
    C: ChangelogWriter,
{
    pub fn new(
        project_provider: P,
        changeset_reader: R,
        changeset_writer: W,
        manifest_writer: M,
        changelog_writer: C,
    ) -> Self {
        Self {
            project_provider,
            changeset_reader,
            changeset_writer,
            manifest_writer,
            changelog_writer,
        }
    }

    /// # Errors
    ///
    /// Returns [`OperationError::InvalidChangesets`] without modifying anything
    /// if any pending changeset fails to parse. Reading the manifest version
    /// or the existing changelog also fails before anything is written. A
    /// failed write is reported as [`OperationError::VersionFailed`] after the
    /// earlier writes were undone, or as
    /// [`OperationError::VersionRollbackFailed`] if undoing them failed too.
    pub fn execute(&self, start_path: &Path, input: VersionInput) -> Result<VersionOutcome> {
        let project = self.project_provider.discover_project(start_path)?;
        let config = self.project_provider.load_config(&project)?;
        let changeset_dir = project.changeset_dir(&config);

        let files = self
            .changeset_reader
            .list_changesets(&changeset_dir, &config)?;
        if files.is_empty() {
            debug!("no pending changesets");
            return Ok(VersionOutcome::NoChangesets);
        }

        let mut records = Vec::with_capacity(files.len());
        let mut originals = BTreeMap::new();
        let mut invalid = Vec::new();
        for path in &files {
            let raw = self.changeset_reader.read_changeset(path)?;
            match parse_changeset(&raw.content, config.package_name(), path, raw.modified_at) {
                Ok(record) => {
                    records.push(record);
                    originals.insert(path.clone(), raw.content);
                }
                Err(reason) => invalid.push(SkippedChangeset {
                    path: path.clone(),
                    reason,
                }),
            }
        }
        if !invalid.is_empty() {
            return Err(OperationError::InvalidChangesets { invalid });
        }

        sort_chronologically(&mut records);
        let bump_type = highest_bump(records.iter().map(|r| r.bump_type));

        let manifest_path = project.manifest_path();
        let previous_version = self.manifest_writer.read_version(&manifest_path)?;
        let new_version = bump_version(&previous_version, bump_type);
        let changelog_path = project.changelog_path(&config);
        let consumed: Vec<PathBuf> = records.iter().map(|r| r.source_path.clone()).collect();

        let release = VersionRelease::new(
            new_version.clone(),
            records.iter().map(ChangelogEntry::from).collect(),
        );

        let changelog_created = if input.dry_run {
            false
        } else {
            let changelog = self.changelog_writer.prepare_release(
                &changelog_path,
                config.package_name(),
                &release,
            )?;
            self.apply(&ReleasePlan {
                manifest_path: &manifest_path,
                previous_version: &previous_version,
                new_version: &new_version,
                changelog: &changelog,
                consumed: &consumed,
                originals: &originals,
            })?;
            changelog.is_new()
        };

        info!(
            from = %previous_version,
            to = %new_version,
            bump = %bump_type,
            consumed = consumed.len(),
            dry_run = input.dry_run,
            "versioned package"
        );

        Ok(VersionOutcome::Applied(VersionSummary {
            previous_version,
            new_version,
            bump_type,
            changelog_path,
            changelog_created,
            consumed,
            dry_run: input.dry_run,
        }))
    }

    fn apply(&self, plan: &ReleasePlan<'_>) -> Result<()> {
        self.manifest_writer
            .write_version(plan.manifest_path, plan.new_version)?;
        let mut applied = Applied::default();

        if let Err(error) = self.changelog_writer.write_changelog(plan.changelog) {
            return Err(self.roll_back(plan, &applied, "write the changelog", error));
        }
        applied.changelog = true;

        for path in plan.consumed {
            if let Err(error) = self.changeset_writer.delete_changeset(path) {
                return Err(self.roll_back(plan, &applied, "consume changesets", error));
            }
            applied.deleted += 1;
        }

        Ok(())
    }

    fn roll_back(
        &self,
        plan: &ReleasePlan<'_>,
        applied: &Applied,
        step: &'static str,
        error: OperationError,
    ) -> OperationError {
        warn!(step, %error, "versioning failed, rolling back");

        let mut rollback_failures = Vec::new();
        let mut check = |step: &'static str, result: Result<()>| {
            if let Err(error) = result {
                warn!(step, %error, "rollback step failed");
                rollback_failures.push(RollbackFailure {
                    step,
                    error: Box::new(error),
                });
            }
        };

        for path in plan.consumed[..applied.deleted].iter().rev() {
            if let Some(content) = plan.originals.get(path) {
                check(
                    "restore consumed changesets",
                    self.changeset_writer.write_changeset(path, content),
                );
            }
        }
        if applied.changelog {
            check(
                "restore the changelog",
                self.changelog_writer.restore_changelog(plan.changelog),
            );
        }
        check(
            "restore the manifest version",
            self.manifest_writer
                .write_version(plan.manifest_path, plan.previous_version),
        );

        let source = Box::new(error);
        if rollback_failures.is_empty() {
            OperationError::VersionFailed { step, source }
        } else {
            OperationError::VersionRollbackFailed {
                step,
                source,
                rollback_failures,
            }
        }
    }
}
