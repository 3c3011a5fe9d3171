use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangesetError {
    #[error("unknown bump type '{0}' (expected major, minor or patch)")]
    UnknownBumpType(String),
}
