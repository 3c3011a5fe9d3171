use std::path::Path;

use changeset_project::PackageManifest;
use semver::Version;

use crate::Result;
use crate::traits::ManifestWriter;

pub struct FileSystemManifestWriter;

impl FileSystemManifestWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemManifestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestWriter for FileSystemManifestWriter {
    fn read_version(&self, manifest_path: &Path) -> Result<Version> {
        Ok(PackageManifest::read(manifest_path)?.version()?)
    }

    fn write_version(&self, manifest_path: &Path, new_version: &Version) -> Result<()> {
        let mut manifest = PackageManifest::read(manifest_path)?;
        manifest.set_version(new_version);
        Ok(manifest.write()?)
    }
}
