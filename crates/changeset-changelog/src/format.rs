use semver::Version;

use changeset_core::BumpType;

use crate::entry::{ChangelogEntry, VersionRelease};

/// Header of a changelog that does not exist yet.
#[must_use]
pub fn new_changelog(package_name: &str) -> String {
    format!("# {package_name}\n")
}

#[must_use]
pub fn bump_heading(bump_type: BumpType) -> &'static str {
    match bump_type {
        BumpType::Major => "Major Changes",
        BumpType::Minor => "Minor Changes",
        BumpType::Patch => "Patch Changes",
    }
}

/// A list item whose continuation lines are indented under the bullet.
///
/// Blank lines stay empty so the output carries no trailing whitespace.
#[must_use]
pub fn format_bullet(description: &str) -> String {
    let mut output = String::from("- ");
    for (index, line) in description.trim().lines().enumerate() {
        if index > 0 {
            output.push('\n');
            if !line.trim().is_empty() {
                output.push_str("  ");
            }
        }
        output.push_str(line.trim_end());
    }
    output
}

/// Entries grouped under `### <Bump> Changes`, major first.
#[must_use]
pub fn format_entries(entries: &[ChangelogEntry]) -> String {
    let mut output = String::new();

    for bump_type in [BumpType::Major, BumpType::Minor, BumpType::Patch] {
        let mut group = entries.iter().filter(|e| e.bump_type == bump_type).peekable();
        if group.peek().is_none() {
            continue;
        }

        output.push_str("\n### ");
        output.push_str(bump_heading(bump_type));
        output.push('\n');

        for entry in group {
            output.push('\n');
            output.push_str(&format_bullet(&entry.description));
            output.push('\n');
        }
    }

    output
}

#[must_use]
pub fn format_version_header(version: &Version) -> String {
    format!("## {version}")
}

#[must_use]
pub fn format_version_release(release: &VersionRelease) -> String {
    let mut output = format_version_header(&release.version);
    output.push('\n');
    output.push_str(&format_entries(&release.entries));
    output
}
