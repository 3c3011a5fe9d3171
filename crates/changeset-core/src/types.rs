use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::SystemTime;

use clap::ValueEnum;

use crate::error::ChangesetError;

/// Semantic version severity of a change. Variant order is the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Patch => 1,
            Self::Minor => 2,
            Self::Major => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpType {
    type Err = ChangesetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            other => Err(ChangesetError::UnknownBumpType(other.to_string())),
        }
    }
}

/// Returns the most severe bump in `bumps`, or [`BumpType::Patch`] when empty.
#[must_use]
pub fn highest_bump<I>(bumps: I) -> BumpType
where
    I: IntoIterator<Item = BumpType>,
{
    bumps
        .into_iter()
        .max_by_key(|bump| bump.priority())
        .unwrap_or(BumpType::Patch)
}

/// A successfully parsed changeset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangesetRecord {
    pub package_name: String,
    pub bump_type: BumpType,
    pub description: String,
    pub source_path: PathBuf,
    pub modified_at: SystemTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub highest_bump: BumpType,
    pub combined_description: String,
    pub description_count: usize,
    /// Source files in the order their descriptions were joined.
    pub sources: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BumpType; 3] = [BumpType::Patch, BumpType::Minor, BumpType::Major];

    #[test]
    fn bump_type_ordering_patch_is_smallest() {
        assert!(BumpType::Patch < BumpType::Minor);
        assert!(BumpType::Patch < BumpType::Major);
    }

    #[test]
    fn bump_type_ordering_major_is_largest() {
        assert!(BumpType::Major > BumpType::Patch);
        assert!(BumpType::Major > BumpType::Minor);
    }

    #[test]
    fn priority_matches_ordering() {
        assert_eq!(BumpType::Patch.priority(), 1);
        assert_eq!(BumpType::Minor.priority(), 2);
        assert_eq!(BumpType::Major.priority(), 3);
    }

    #[test]
    fn parses_only_exact_literals() {
        assert_eq!("patch".parse::<BumpType>(), Ok(BumpType::Patch));
        assert_eq!("minor".parse::<BumpType>(), Ok(BumpType::Minor));
        assert_eq!("major".parse::<BumpType>(), Ok(BumpType::Major));

        for invalid in ["Patch", "MAJOR", " minor", "prerelease", ""] {
            assert_eq!(
                invalid.parse::<BumpType>(),
                Err(ChangesetError::UnknownBumpType(invalid.to_string()))
            );
        }
    }

    #[test]
    fn display_matches_parse() {
        for bump in ALL {
            assert_eq!(bump.to_string().parse::<BumpType>(), Ok(bump));
        }
    }

    #[test]
    fn highest_bump_of_empty_is_patch() {
        assert_eq!(highest_bump(Vec::new()), BumpType::Patch);
    }

    #[test]
    fn highest_bump_prefers_major_then_minor() {
        assert_eq!(
            highest_bump([BumpType::Patch, BumpType::Major, BumpType::Minor]),
            BumpType::Major
        );
        assert_eq!(
            highest_bump([BumpType::Patch, BumpType::Minor, BumpType::Patch]),
            BumpType::Minor
        );
        assert_eq!(
            highest_bump([BumpType::Patch, BumpType::Patch]),
            BumpType::Patch
        );
    }

    #[test]
    fn highest_bump_is_order_independent() {
        for a in ALL {
            for b in ALL {
                for c in ALL {
                    let expected = highest_bump([a, b, c]);
                    assert_eq!(highest_bump([c, b, a]), expected);
                    assert_eq!(highest_bump([b, a, c]), expected);
                    assert_eq!(
                        highest_bump([highest_bump([a, b]), c]),
                        highest_bump([a, highest_bump([b, c])])
                    );
                }
            }
        }
    }
}
