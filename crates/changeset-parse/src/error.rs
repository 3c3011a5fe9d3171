use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrontMatterError {
    #[error("missing opening delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("malformed declaration '{line}': expected '<package>: <bump>'")]
    MalformedDeclaration { line: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing bump type declaration")]
    MissingBumpType,

    #[error("unrecognized bump type '{value}' for package '{package}' (expected major, minor or patch)")]
    UnknownBumpType { package: String, value: String },

    #[error("package name mismatch: expected '{expected}', found {}", format_found(found))]
    PackageMismatch {
        expected: String,
        found: Vec<String>,
    },

    #[error("package '{package}' is declared more than once")]
    DuplicatePackage { package: String },

    #[error("missing description")]
    MissingDescription,

    #[error("input exceeds maximum size of {max_bytes} bytes")]
    InputTooLarge { max_bytes: usize },
}

fn format_found(found: &[String]) -> String {
    found
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
