mod status;
mod verify;

pub(crate) use status::{PlainTextStatusFormatter, StatusFormatter};
pub(crate) use verify::{PlainTextVerifyFormatter, VerifyFormatter};

use std::path::Path;

/// File name for display, falling back to the full path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
