use std::path::Path;

use changeset_changelog::{Changelog, ChangelogError, VersionRelease};
use semver::Version;

use crate::Result;
use crate::traits::{ChangelogWriter, PreparedChangelog};

pub struct FileSystemChangelogWriter;

impl FileSystemChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for FileSystemChangelogWriter {
    fn prepare_release(
        &self,
        changelog_path: &Path,
        package_name: &str,
        release: &VersionRelease,
    ) -> Result<PreparedChangelog> {
        let (mut changelog, previous) = if changelog_path.exists() {
            let existing = Changelog::from_file(changelog_path)?;
            let previous = existing.content().to_string();
            (existing, Some(previous))
        } else {
            (Changelog::new(package_name), None)
        };

        changelog.add_release(release);

        Ok(PreparedChangelog {
            path: changelog_path.to_path_buf(),
            content: changelog.content().to_string(),
            previous,
        })
    }

    fn write_changelog(&self, prepared: &PreparedChangelog) -> Result<()> {
        Changelog::from_content(prepared.content.as_str()).write_to_file(&prepared.path)?;
        Ok(())
    }

    fn restore_changelog(&self, prepared: &PreparedChangelog) -> Result<()> {
        match &prepared.previous {
            Some(previous) => {
                Changelog::from_content(previous.as_str()).write_to_file(&prepared.path)?;
            }
            None => match std::fs::remove_file(&prepared.path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(ChangelogError::Remove {
                        path: prepared.path.clone(),
                        source,
                    }
                    .into());
                }
            },
        }
        Ok(())
    }

    fn release_notes(&self, changelog_path: &Path, version: &Version) -> Result<Option<String>> {
        if !changelog_path.exists() {
            return Ok(None);
        }
        Ok(Changelog::from_file(changelog_path)?.release_notes(version))
    }
}
