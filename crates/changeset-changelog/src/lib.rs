mod changelog;
mod entry;
mod error;
mod format;

pub use changelog::Changelog;
pub use entry::{ChangelogEntry, VersionRelease};
pub use error::ChangelogError;
pub use format::{
    bump_heading, format_bullet, format_entries, format_version_header, format_version_release,
    new_changelog,
};

pub type Result<T> = std::result::Result<T, ChangelogError>;
