mod add;
mod merge;
mod release_notes;
mod status;
mod verify;
mod version;

use std::path::Path;

use changeset_core::BumpType;
use changeset_project::ConfigOverrides;
use clap::{Args, Subcommand};
use semver::Version;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check that the pull request adds exactly one valid changeset
    Verify(VerifyArgs),
    /// Collapse all pending changesets into one
    Merge,
    /// Show pending changesets and the bump they would produce
    Status,
    /// Add a new changeset
    Add(AddArgs),
    /// Apply pending changesets to the manifest version and changelog
    Version(VersionArgs),
    /// Print the changelog section for a released version
    ReleaseNotes(ReleaseNotesArgs),
}

#[derive(Args)]
pub(crate) struct VerifyArgs {
    /// Base revision of the pull request
    #[arg(long, env = "CHANGESET_BASE_SHA")]
    pub base: Option<String>,

    /// Head revision of the pull request
    #[arg(long, env = "CHANGESET_HEAD_SHA")]
    pub head: Option<String>,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    /// Bump type (prompted when omitted)
    #[arg(long, short, value_enum)]
    pub bump: Option<BumpType>,

    /// Description; use '-' to read from stdin (prompted when omitted)
    #[arg(long, short)]
    pub message: Option<String>,
}

#[derive(Args)]
pub(crate) struct VersionArgs {
    /// Report the new version without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub(crate) struct ReleaseNotesArgs {
    /// Version to print (default: version in package.json)
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<Version>,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path, overrides: ConfigOverrides) -> Result<()> {
        match self {
            Self::Verify(args) => verify::run(args, start_path, overrides),
            Self::Merge => merge::run(start_path, overrides),
            Self::Status => status::run(start_path, overrides),
            Self::Add(args) => add::run(args, start_path, overrides),
            Self::Version(args) => version::run(args, start_path, overrides),
            Self::ReleaseNotes(args) => release_notes::run(args, start_path, overrides),
        }
    }
}

/// CI systems export some variables empty when they do not apply.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
