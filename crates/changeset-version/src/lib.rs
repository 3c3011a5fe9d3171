use changeset_core::BumpType;
use semver::{BuildMetadata, Prerelease, Version};

/// Applies `bump_type` to `version`, dropping prerelease and build metadata.
///
/// A prerelease that already sits on the target release line is promoted
/// instead of skipping past it (`2.0.0-rc.1` + major is `2.0.0`).
#[must_use]
pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let mut new_version = Version::new(version.major, version.minor, version.patch);
    new_version.pre = Prerelease::EMPTY;
    new_version.build = BuildMetadata::EMPTY;

    let is_prerelease = !version.pre.is_empty();

    match bump_type {
        BumpType::Major => {
            if !(is_prerelease && version.minor == 0 && version.patch == 0) {
                new_version.major += 1;
            }
            new_version.minor = 0;
            new_version.patch = 0;
        }
        BumpType::Minor => {
            if !(is_prerelease && version.patch == 0) {
                new_version.minor += 1;
            }
            new_version.patch = 0;
        }
        BumpType::Patch => {
            if !is_prerelease {
                new_version.patch += 1;
            }
        }
    }

    new_version
}
