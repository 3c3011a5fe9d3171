use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use changeset_changelog::{Changelog, ChangelogError, VersionRelease};
use changeset_core::BumpType;
use changeset_git::{FileChange, FileStatus, GitError};
use changeset_parse::serialize_changeset;
use changeset_project::{ChangesetConfig, Project};
use semver::Version;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    BumpSelection, ChangelogWriter, ChangesetReader, ChangesetWriter, DescriptionInput,
    GitProvider, InteractionProvider, ManifestWriter, MergeJournalIO, PreparedChangelog,
    ProjectProvider,
};
use crate::types::{MergeJournal, RawChangeset};

pub const MOCK_ROOT: &str = "/mock/project";

#[must_use]
pub fn mock_changeset_dir() -> PathBuf {
    PathBuf::from(MOCK_ROOT).join(".changeset")
}

#[must_use]
pub fn changeset_path(filename: &str) -> PathBuf {
    mock_changeset_dir().join(filename)
}

#[must_use]
pub fn changeset_content(package_name: &str, bump: BumpType, description: &str) -> String {
    serialize_changeset(package_name, bump, description)
}

#[must_use]
pub fn at_secs(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

fn not_found(path: &Path) -> std::io::Error {
    std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("mock file not found: {}", path.display()),
    )
}

pub struct MockProjectProvider {
    project: Project,
    config: ChangesetConfig,
}

impl MockProjectProvider {
    #[must_use]
    pub fn single_package(name: &str) -> Self {
        Self {
            project: Project::new(PathBuf::from(MOCK_ROOT)),
            config: ChangesetConfig::new(name, ".changeset"),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ChangesetConfig) -> Self {
        self.config = config;
        self
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<Project> {
        Ok(self.project.clone())
    }

    fn load_config(&self, _project: &Project) -> Result<ChangesetConfig> {
        Ok(self.config.clone())
    }

    fn ensure_changeset_dir(
        &self,
        project: &Project,
        config: &ChangesetConfig,
    ) -> Result<PathBuf> {
        Ok(project.changeset_dir(config))
    }
}

/// Revisions resolve only once they are known; `HEAD` always is.
pub struct MockGitProvider {
    changed_files: Vec<FileChange>,
    available: Mutex<HashSet<String>>,
    fetchable_revisions: HashSet<String>,
    fetchable_branches: HashSet<String>,
    fetches: Mutex<Vec<String>>,
    diffs: Mutex<Vec<(String, String)>>,
    committed: HashMap<(String, PathBuf), String>,
    broken: bool,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changed_files: Vec::new(),
            available: Mutex::new(HashSet::from(["HEAD".to_string()])),
            fetchable_revisions: HashSet::new(),
            fetchable_branches: HashSet::new(),
            fetches: Mutex::new(Vec::new()),
            diffs: Mutex::new(Vec::new()),
            committed: HashMap::new(),
            broken: false,
        }
    }

    /// A provider for a directory that is not a repository.
    #[must_use]
    pub fn not_a_repository() -> Self {
        Self {
            broken: true,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_changed_files(mut self, files: Vec<FileChange>) -> Self {
        self.changed_files = files;
        self
    }

    #[must_use]
    pub fn with_added(self, paths: &[PathBuf]) -> Self {
        let files = paths
            .iter()
            .map(|p| FileChange::new(p.clone(), FileStatus::Added))
            .collect();
        self.with_changed_files(files)
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_available(self, revision: &str) -> Self {
        self.available
            .lock()
            .expect("lock poisoned")
            .insert(revision.to_string());
        self
    }

    /// Content of `path` in `revision`, distinct from the working tree.
    #[must_use]
    pub fn with_committed(mut self, revision: &str, path: PathBuf, content: &str) -> Self {
        self.committed
            .insert((revision.to_string(), path), content.to_string());
        self
    }

    #[must_use]
    pub fn with_fetchable_revision(mut self, revision: &str) -> Self {
        self.fetchable_revisions.insert(revision.to_string());
        self
    }

    #[must_use]
    pub fn with_fetchable_branch(mut self, branch: &str) -> Self {
        self.fetchable_branches.insert(branch.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn diffs(&self) -> Vec<(String, String)> {
        self.diffs.lock().expect("lock poisoned").clone()
    }

    fn check_repository(&self, project_root: &Path) -> Result<()> {
        if self.broken {
            return Err(GitError::NotARepository {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    fn is_available(&self, revision: &str) -> bool {
        self.available
            .lock()
            .expect("lock poisoned")
            .contains(revision)
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn changed_files(
        &self,
        project_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        self.check_repository(project_root)?;
        for revision in [base, head] {
            if !self.is_available(revision) {
                return Err(GitError::RefNotFound {
                    refspec: revision.to_string(),
                }
                .into());
            }
        }
        self.diffs
            .lock()
            .expect("lock poisoned")
            .push((base.to_string(), head.to_string()));
        Ok(self.changed_files.clone())
    }

    fn is_revision_available(&self, project_root: &Path, revision: &str) -> Result<bool> {
        self.check_repository(project_root)?;
        Ok(self.is_available(revision))
    }

    fn fetch_branch(&self, project_root: &Path, branch: &str) -> Result<()> {
        self.check_repository(project_root)?;
        self.fetches
            .lock()
            .expect("lock poisoned")
            .push(format!("branch:{branch}"));
        if !self.fetchable_branches.contains(branch) {
            return Err(GitError::RemoteNotFound {
                name: "origin".to_string(),
            }
            .into());
        }
        self.available
            .lock()
            .expect("lock poisoned")
            .insert(format!("origin/{branch}"));
        Ok(())
    }

    fn fetch_revision(&self, project_root: &Path, revision: &str) -> Result<()> {
        self.check_repository(project_root)?;
        self.fetches
            .lock()
            .expect("lock poisoned")
            .push(format!("revision:{revision}"));
        if !self.fetchable_revisions.contains(revision) {
            return Err(GitError::RemoteNotFound {
                name: "origin".to_string(),
            }
            .into());
        }
        self.available
            .lock()
            .expect("lock poisoned")
            .insert(revision.to_string());
        Ok(())
    }

    fn read_file_at(
        &self,
        project_root: &Path,
        revision: &str,
        path: &Path,
    ) -> Result<Option<String>> {
        self.check_repository(project_root)?;
        if !self.is_available(revision) {
            return Err(GitError::RefNotFound {
                refspec: revision.to_string(),
            }
            .into());
        }
        Ok(self
            .committed
            .get(&(revision.to_string(), path.to_path_buf()))
            .cloned())
    }
}

impl GitProvider for Arc<MockGitProvider> {
    fn changed_files(
        &self,
        project_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        (**self).changed_files(project_root, base, head)
    }

    fn is_revision_available(&self, project_root: &Path, revision: &str) -> Result<bool> {
        (**self).is_revision_available(project_root, revision)
    }

    fn fetch_branch(&self, project_root: &Path, branch: &str) -> Result<()> {
        (**self).fetch_branch(project_root, branch)
    }

    fn fetch_revision(&self, project_root: &Path, revision: &str) -> Result<()> {
        (**self).fetch_revision(project_root, revision)
    }

    fn read_file_at(
        &self,
        project_root: &Path,
        revision: &str,
        path: &Path,
    ) -> Result<Option<String>> {
        (**self).read_file_at(project_root, revision, path)
    }
}

/// In-memory changeset directory implementing both reader and writer.
pub struct MockChangesetStore {
    files: Mutex<BTreeMap<PathBuf, (String, SystemTime)>>,
    unreadable: HashSet<PathBuf>,
    undeletable: HashSet<PathBuf>,
    written: Mutex<Vec<PathBuf>>,
    deleted: Mutex<Vec<PathBuf>>,
    fail_writes: bool,
}

impl MockChangesetStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: Mutex::new(BTreeMap::new()),
            unreadable: HashSet::new(),
            undeletable: HashSet::new(),
            written: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_file(self, path: PathBuf, content: &str, modified_at: SystemTime) -> Self {
        self.files
            .lock()
            .expect("lock poisoned")
            .insert(path, (content.to_string(), modified_at));
        self
    }

    #[must_use]
    pub fn with_changeset(
        self,
        filename: &str,
        package_name: &str,
        bump: BumpType,
        description: &str,
        secs: u64,
    ) -> Self {
        self.with_file(
            changeset_path(filename),
            &changeset_content(package_name, bump, description),
            at_secs(secs),
        )
    }

    /// Listed like any other file but every read fails.
    #[must_use]
    pub fn with_unreadable(mut self, path: PathBuf) -> Self {
        self.unreadable.insert(path);
        self
    }

    #[must_use]
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Present and readable, but deleting it fails.
    #[must_use]
    pub fn with_undeletable(mut self, path: PathBuf) -> Self {
        self.undeletable.insert(path);
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files
            .lock()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn content(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .expect("lock poisoned")
            .get(path)
            .map(|(content, _)| content.clone())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn written(&self) -> Vec<PathBuf> {
        self.written.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn deleted(&self) -> Vec<PathBuf> {
        self.deleted.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockChangesetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangesetReader for MockChangesetStore {
    fn list_changesets(
        &self,
        changeset_dir: &Path,
        config: &ChangesetConfig,
    ) -> Result<Vec<PathBuf>> {
        let files = self.files.lock().expect("lock poisoned");
        let mut listed: Vec<PathBuf> = files
            .keys()
            .chain(self.unreadable.iter())
            .filter(|p| p.parent() == Some(changeset_dir) && config.is_changeset_file(p))
            .cloned()
            .collect();
        listed.sort();
        listed.dedup();
        Ok(listed)
    }

    fn read_changeset(&self, path: &Path) -> Result<RawChangeset> {
        if self.unreadable.contains(path) {
            return Err(OperationError::ChangesetFileRead {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock denied"),
            });
        }
        self.files
            .lock()
            .expect("lock poisoned")
            .get(path)
            .map(|(content, modified_at)| RawChangeset {
                path: path.to_path_buf(),
                content: content.clone(),
                modified_at: *modified_at,
            })
            .ok_or_else(|| OperationError::ChangesetFileRead {
                path: path.to_path_buf(),
                source: not_found(path),
            })
    }
}

impl ChangesetWriter for MockChangesetStore {
    fn unique_filename(&self, changeset_dir: &Path, extension: &str) -> String {
        (1..)
            .map(|n| format!("mock-changeset-{n}.{extension}"))
            .find(|name| !self.filename_exists(changeset_dir, name))
            .unwrap_or_default()
    }

    fn filename_exists(&self, changeset_dir: &Path, filename: &str) -> bool {
        self.files
            .lock()
            .expect("lock poisoned")
            .contains_key(&changeset_dir.join(filename))
    }

    fn write_changeset(&self, path: &Path, content: &str) -> Result<()> {
        if self.fail_writes {
            return Err(OperationError::ChangesetFileWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other("mock disk full"),
            });
        }
        self.files
            .lock()
            .expect("lock poisoned")
            .insert(path.to_path_buf(), (content.to_string(), at_secs(u64::from(u32::MAX))));
        self.written
            .lock()
            .expect("lock poisoned")
            .push(path.to_path_buf());
        Ok(())
    }

    fn delete_changeset(&self, path: &Path) -> Result<()> {
        if self.undeletable.contains(path) {
            return Err(OperationError::ChangesetFileDelete {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock denied"),
            });
        }
        if self
            .files
            .lock()
            .expect("lock poisoned")
            .remove(path)
            .is_none()
        {
            return Err(OperationError::ChangesetFileDelete {
                path: path.to_path_buf(),
                source: not_found(path),
            });
        }
        self.deleted
            .lock()
            .expect("lock poisoned")
            .push(path.to_path_buf());
        Ok(())
    }

    fn remove_temp_files(&self, changeset_dir: &Path) -> Result<usize> {
        let mut files = self.files.lock().expect("lock poisoned");
        let before = files.len();
        files.retain(|path, _| {
            let is_temp = path.parent() == Some(changeset_dir)
                && path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .is_some_and(|n| n.starts_with('.') && n.ends_with(".tmp"));
            !is_temp
        });
        Ok(before - files.len())
    }
}

impl ChangesetReader for Arc<MockChangesetStore> {
    fn list_changesets(
        &self,
        changeset_dir: &Path,
        config: &ChangesetConfig,
    ) -> Result<Vec<PathBuf>> {
        (**self).list_changesets(changeset_dir, config)
    }

    fn read_changeset(&self, path: &Path) -> Result<RawChangeset> {
        (**self).read_changeset(path)
    }
}

impl ChangesetWriter for Arc<MockChangesetStore> {
    fn unique_filename(&self, changeset_dir: &Path, extension: &str) -> String {
        (**self).unique_filename(changeset_dir, extension)
    }

    fn filename_exists(&self, changeset_dir: &Path, filename: &str) -> bool {
        (**self).filename_exists(changeset_dir, filename)
    }

    fn write_changeset(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write_changeset(path, content)
    }

    fn delete_changeset(&self, path: &Path) -> Result<()> {
        (**self).delete_changeset(path)
    }

    fn remove_temp_files(&self, changeset_dir: &Path) -> Result<usize> {
        (**self).remove_temp_files(changeset_dir)
    }
}

pub struct MockMergeJournalIO {
    current: Mutex<Option<MergeJournal>>,
    saved: Mutex<Vec<MergeJournal>>,
}

impl MockMergeJournalIO {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
            saved: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_journal(journal: MergeJournal) -> Self {
        Self {
            current: Mutex::new(Some(journal)),
            saved: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn current(&self) -> Option<MergeJournal> {
        self.current.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn saved(&self) -> Vec<MergeJournal> {
        self.saved.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockMergeJournalIO {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeJournalIO for MockMergeJournalIO {
    fn load_journal(&self, _changeset_dir: &Path) -> Result<Option<MergeJournal>> {
        Ok(self.current())
    }

    fn save_journal(&self, _changeset_dir: &Path, journal: &MergeJournal) -> Result<()> {
        *self.current.lock().expect("lock poisoned") = Some(journal.clone());
        self.saved
            .lock()
            .expect("lock poisoned")
            .push(journal.clone());
        Ok(())
    }

    fn remove_journal(&self, _changeset_dir: &Path) -> Result<()> {
        *self.current.lock().expect("lock poisoned") = None;
        Ok(())
    }
}

impl MergeJournalIO for Arc<MockMergeJournalIO> {
    fn load_journal(&self, changeset_dir: &Path) -> Result<Option<MergeJournal>> {
        (**self).load_journal(changeset_dir)
    }

    fn save_journal(&self, changeset_dir: &Path, journal: &MergeJournal) -> Result<()> {
        (**self).save_journal(changeset_dir, journal)
    }

    fn remove_journal(&self, changeset_dir: &Path) -> Result<()> {
        (**self).remove_journal(changeset_dir)
    }
}

pub struct MockManifestWriter {
    version: Mutex<Option<Version>>,
    written: Mutex<Vec<(PathBuf, Version)>>,
}

impl MockManifestWriter {
    /// # Panics
    ///
    /// Panics if the version string is not valid semver.
    #[must_use]
    pub fn with_version(version: &str) -> Self {
        Self {
            version: Mutex::new(Some(version.parse().expect("valid version"))),
            written: Mutex::new(Vec::new()),
        }
    }

    /// A manifest without a readable version.
    #[must_use]
    pub fn missing() -> Self {
        Self {
            version: Mutex::new(None),
            written: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn written(&self) -> Vec<(PathBuf, Version)> {
        self.written.lock().expect("lock poisoned").clone()
    }

    /// Version the manifest holds now.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn version(&self) -> Option<Version> {
        self.version.lock().expect("lock poisoned").clone()
    }
}

impl ManifestWriter for MockManifestWriter {
    fn read_version(&self, manifest_path: &Path) -> Result<Version> {
        self.version
            .lock()
            .expect("lock poisoned")
            .clone()
            .ok_or_else(|| {
                changeset_project::ProjectError::ManifestRead {
                    path: manifest_path.to_path_buf(),
                    source: not_found(manifest_path),
                }
                .into()
            })
    }

    fn write_version(&self, manifest_path: &Path, new_version: &Version) -> Result<()> {
        *self.version.lock().expect("lock poisoned") = Some(new_version.clone());
        self.written
            .lock()
            .expect("lock poisoned")
            .push((manifest_path.to_path_buf(), new_version.clone()));
        Ok(())
    }
}

impl ManifestWriter for Arc<MockManifestWriter> {
    fn read_version(&self, manifest_path: &Path) -> Result<Version> {
        (**self).read_version(manifest_path)
    }

    fn write_version(&self, manifest_path: &Path, new_version: &Version) -> Result<()> {
        (**self).write_version(manifest_path, new_version)
    }
}

pub struct MockChangelogWriter {
    releases: Mutex<Vec<(PathBuf, String, VersionRelease)>>,
    written: Mutex<Vec<PathBuf>>,
    restored: Mutex<Vec<PathBuf>>,
    notes: HashMap<Version, String>,
    fail_writes: bool,
}

impl MockChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            releases: Mutex::new(Vec::new()),
            written: Mutex::new(Vec::new()),
            restored: Mutex::new(Vec::new()),
            notes: HashMap::new(),
            fail_writes: false,
        }
    }

    #[must_use]
    pub fn with_notes(mut self, version: Version, body: &str) -> Self {
        self.notes.insert(version, body.to_string());
        self
    }

    #[must_use]
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Releases passed to `prepare_release`, written or not.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn releases(&self) -> Vec<(PathBuf, String, VersionRelease)> {
        self.releases.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn written(&self) -> Vec<PathBuf> {
        self.written.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn restored(&self) -> Vec<PathBuf> {
        self.restored.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for MockChangelogWriter {
    fn prepare_release(
        &self,
        changelog_path: &Path,
        package_name: &str,
        release: &VersionRelease,
    ) -> Result<PreparedChangelog> {
        let previous = if self.written().is_empty() {
            None
        } else {
            Some(String::new())
        };
        let mut changelog = Changelog::new(package_name);
        changelog.add_release(release);

        self.releases.lock().expect("lock poisoned").push((
            changelog_path.to_path_buf(),
            package_name.to_string(),
            release.clone(),
        ));

        Ok(PreparedChangelog {
            path: changelog_path.to_path_buf(),
            content: changelog.content().to_string(),
            previous,
        })
    }

    fn write_changelog(&self, prepared: &PreparedChangelog) -> Result<()> {
        if self.fail_writes {
            return Err(ChangelogError::Write {
                path: prepared.path.clone(),
                source: std::io::Error::other("mock disk full"),
            }
            .into());
        }
        self.written
            .lock()
            .expect("lock poisoned")
            .push(prepared.path.clone());
        Ok(())
    }

    fn restore_changelog(&self, prepared: &PreparedChangelog) -> Result<()> {
        self.restored
            .lock()
            .expect("lock poisoned")
            .push(prepared.path.clone());
        Ok(())
    }

    fn release_notes(&self, _changelog_path: &Path, version: &Version) -> Result<Option<String>> {
        Ok(self.notes.get(version).cloned())
    }
}

impl ChangelogWriter for Arc<MockChangelogWriter> {
    fn prepare_release(
        &self,
        changelog_path: &Path,
        package_name: &str,
        release: &VersionRelease,
    ) -> Result<PreparedChangelog> {
        (**self).prepare_release(changelog_path, package_name, release)
    }

    fn write_changelog(&self, prepared: &PreparedChangelog) -> Result<()> {
        (**self).write_changelog(prepared)
    }

    fn restore_changelog(&self, prepared: &PreparedChangelog) -> Result<()> {
        (**self).restore_changelog(prepared)
    }

    fn release_notes(&self, changelog_path: &Path, version: &Version) -> Result<Option<String>> {
        (**self).release_notes(changelog_path, version)
    }
}

pub struct MockInteractionProvider {
    pub bump_selection: BumpSelection,
    pub description: DescriptionInput,
    prompts: Mutex<Vec<&'static str>>,
}

impl MockInteractionProvider {
    #[must_use]
    pub fn all_cancelled() -> Self {
        Self {
            bump_selection: BumpSelection::Cancelled,
            description: DescriptionInput::Cancelled,
            prompts: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_selections(bump: BumpType, description: &str) -> Self {
        Self {
            bump_selection: BumpSelection::Selected(bump),
            description: DescriptionInput::Provided(description.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Which prompts were shown, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn prompts(&self) -> Vec<&'static str> {
        self.prompts.lock().expect("lock poisoned").clone()
    }
}

impl InteractionProvider for MockInteractionProvider {
    fn select_bump_type(&self, _package_name: &str) -> Result<BumpSelection> {
        self.prompts.lock().expect("lock poisoned").push("bump");
        Ok(self.bump_selection.clone())
    }

    fn get_description(&self) -> Result<DescriptionInput> {
        self.prompts
            .lock()
            .expect("lock poisoned")
            .push("description");
        Ok(self.description.clone())
    }
}

impl InteractionProvider for Arc<MockInteractionProvider> {
    fn select_bump_type(&self, package_name: &str) -> Result<BumpSelection> {
        (**self).select_bump_type(package_name)
    }

    fn get_description(&self) -> Result<DescriptionInput> {
        (**self).get_description()
    }
}
