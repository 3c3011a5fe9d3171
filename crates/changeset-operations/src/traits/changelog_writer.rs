use std::path::{Path, PathBuf};

use changeset_changelog::VersionRelease;
use semver::Version;

use crate::Result;

/// A changelog with a release added in memory, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedChangelog {
    pub path: PathBuf,
    pub content: String,
    /// Content on disk before the release, `None` when the file did not exist.
    pub previous: Option<String>,
}

impl PreparedChangelog {
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.previous.is_none()
    }
}

pub trait ChangelogWriter: Send + Sync {
    /// Renders the changelog with `release` prepended, creating it titled
    /// with `package_name` when absent. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing changelog cannot be read.
    fn prepare_release(
        &self,
        changelog_path: &Path,
        package_name: &str,
        release: &VersionRelease,
    ) -> Result<PreparedChangelog>;

    /// # Errors
    ///
    /// Returns an error if the changelog cannot be written.
    fn write_changelog(&self, prepared: &PreparedChangelog) -> Result<()>;

    /// Puts back the content `prepared` replaced, removing a changelog that
    /// did not exist before.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be written or removed.
    fn restore_changelog(&self, prepared: &PreparedChangelog) -> Result<()>;

    /// Body of the section for `version`; `None` if the changelog or the
    /// section does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing changelog cannot be read.
    fn release_notes(&self, changelog_path: &Path, version: &Version) -> Result<Option<String>>;
}
