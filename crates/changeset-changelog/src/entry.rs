use semver::Version;

use changeset_core::{BumpType, ChangesetRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub bump_type: BumpType,
    pub description: String,
}

impl ChangelogEntry {
    #[must_use]
    pub fn new(bump_type: BumpType, description: impl Into<String>) -> Self {
        Self {
            bump_type,
            description: description.into(),
        }
    }
}

impl From<&ChangesetRecord> for ChangelogEntry {
    fn from(record: &ChangesetRecord) -> Self {
        Self::new(record.bump_type, record.description.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRelease {
    pub version: Version,
    pub entries: Vec<ChangelogEntry>,
}

impl VersionRelease {
    #[must_use]
    pub fn new(version: Version, entries: Vec<ChangelogEntry>) -> Self {
        Self { version, entries }
    }
}
