use std::path::Path;

use semver::Version;

use crate::Result;

pub trait ManifestWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or has no valid version.
    fn read_version(&self, manifest_path: &Path) -> Result<Version>;

    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written.
    fn write_version(&self, manifest_path: &Path, new_version: &Version) -> Result<()>;
}
