use std::path::Path;

use semver::Version;

use crate::entry::VersionRelease;
use crate::error::ChangelogError;
use crate::format::{format_version_release, new_changelog};

const VERSION_HEADING_PREFIX: &str = "## ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    content: String,
}

impl Changelog {
    #[must_use]
    pub fn new(package_name: &str) -> Self {
        Self {
            content: new_changelog(package_name),
        }
    }

    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ChangelogError> {
        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { content })
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Inserts `release` above the newest existing version section.
    pub fn add_release(&mut self, release: &VersionRelease) {
        let formatted = format_version_release(release);
        let insertion_point = self.find_insertion_point();

        let mut new_content = String::with_capacity(self.content.len() + formatted.len() + 2);

        new_content.push_str(&self.content[..insertion_point]);
        if !new_content.is_empty() && !new_content.ends_with("\n\n") {
            if new_content.ends_with('\n') {
                new_content.push('\n');
            } else {
                new_content.push_str("\n\n");
            }
        }
        new_content.push_str(&formatted);

        let rest = &self.content[insertion_point..];
        if !rest.is_empty() {
            new_content.push('\n');
            new_content.push_str(rest);
        }

        self.content = new_content;
    }

    /// Body of the section for `version`, without its heading and trimmed.
    ///
    /// Headings of the form `## 1.2.3`, `## v1.2.3` and `## [1.2.3] - date`
    /// are recognized. Returns `None` when no section matches.
    #[must_use]
    pub fn release_notes(&self, version: &Version) -> Option<String> {
        let wanted = version.to_string();
        let mut lines = self.content.lines();

        lines
            .by_ref()
            .find(|line| heading_version(line).is_some_and(|found| found == wanted))?;

        let body: Vec<&str> = lines
            .take_while(|line| heading_version(line).is_none())
            .collect();

        Some(body.join("\n").trim().to_string())
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Write` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangelogError> {
        std::fs::write(path, &self.content).map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn find_insertion_point(&self) -> usize {
        let mut offset = 0;
        for line in self.content.split_inclusive('\n') {
            if line.starts_with(VERSION_HEADING_PREFIX) {
                return offset;
            }
            offset += line.len();
        }
        self.content.len()
    }
}

/// Version token of a level-two heading, or `None` for any other line.
fn heading_version(line: &str) -> Option<&str> {
    let text = line.strip_prefix(VERSION_HEADING_PREFIX)?;
    let token = text.split_whitespace().next()?;
    let token = token.trim_start_matches('[').trim_end_matches(']');
    Some(token.strip_prefix('v').unwrap_or(token))
}
