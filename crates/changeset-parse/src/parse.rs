use std::path::Path;
use std::time::SystemTime;

use changeset_core::{BumpType, ChangesetRecord};

use crate::error::{FormatError, FrontMatterError, ValidationError};

pub(crate) const FRONT_MATTER_DELIMITER: &str = "---";

const MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

struct FrontMatter<'a> {
    declarations: Vec<&'a str>,
    /// Everything after the closing delimiter line, `None` when it is missing.
    body: Option<&'a str>,
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_delimiter(line: &str) -> bool {
    strip_line_ending(line).trim_end() == FRONT_MATTER_DELIMITER
}

fn split_front_matter(content: &str) -> Result<FrontMatter<'_>, FormatError> {
    let mut lines = content.split_inclusive('\n');

    let Some(opening) = lines.next().filter(|line| is_delimiter(line)) else {
        return Err(FrontMatterError::MissingOpeningDelimiter.into());
    };

    let mut consumed = opening.len();
    let mut declarations = Vec::new();

    for line in lines {
        consumed += line.len();
        if is_delimiter(line) {
            return Ok(FrontMatter {
                declarations,
                body: Some(&content[consumed..]),
            });
        }
        declarations.push(strip_line_ending(line));
    }

    Ok(FrontMatter {
        declarations,
        body: None,
    })
}

fn unquote(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn parse_declaration(line: &str) -> Result<(&str, &str), FormatError> {
    let malformed = || FrontMatterError::MalformedDeclaration {
        line: line.to_string(),
    };

    let (name, value) = line.split_once(':').ok_or_else(malformed)?;
    let name = unquote(name.trim());
    let value = unquote(value.trim());

    if name.is_empty() {
        return Err(malformed().into());
    }

    Ok((name, value))
}

fn resolve_bump(declarations: &[&str], expected_package: &str) -> Result<BumpType, FormatError> {
    let mut found = Vec::new();
    let mut declared: Option<&str> = None;

    let lines = declarations
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    for line in lines {
        let (name, value) = parse_declaration(line)?;
        if name == expected_package {
            if declared.is_some() {
                return Err(ValidationError::DuplicatePackage {
                    package: name.to_string(),
                }
                .into());
            }
            declared = Some(value);
        }
        found.push(name.to_string());
    }

    if found.is_empty() {
        return Err(ValidationError::MissingBumpType.into());
    }

    let Some(value) = declared else {
        return Err(ValidationError::PackageMismatch {
            expected: expected_package.to_string(),
            found,
        }
        .into());
    };

    value.parse::<BumpType>().map_err(|_| {
        ValidationError::UnknownBumpType {
            package: expected_package.to_string(),
            value: value.to_string(),
        }
        .into()
    })
}

/// Parses one changeset file declaring a bump for `expected_package`.
///
/// # Errors
///
/// Returns a [`FormatError`] when the front matter is malformed, the package
/// declaration is missing or names a different package, the bump literal is
/// not recognized, or the description is absent.
#[must_use = "parsing result should be handled"]
pub fn parse_changeset(
    content: &str,
    expected_package: &str,
    source_path: &Path,
    modified_at: SystemTime,
) -> Result<ChangesetRecord, FormatError> {
    if content.len() > MAX_INPUT_SIZE {
        return Err(ValidationError::InputTooLarge {
            max_bytes: MAX_INPUT_SIZE,
        }
        .into());
    }

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let front_matter = split_front_matter(content.trim_start())?;

    let Some(body) = front_matter.body else {
        return Err(ValidationError::MissingDescription.into());
    };

    let bump_type = resolve_bump(&front_matter.declarations, expected_package)?;

    let description = body.trim();
    if description.is_empty() {
        return Err(ValidationError::MissingDescription.into());
    }

    Ok(ChangesetRecord {
        package_name: expected_package.to_string(),
        bump_type,
        description: description.to_string(),
        source_path: source_path.to_path_buf(),
        modified_at,
    })
}
