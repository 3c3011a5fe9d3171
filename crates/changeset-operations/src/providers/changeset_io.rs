use std::fs;
use std::path::{Path, PathBuf};

use changeset_project::ChangesetConfig;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangesetReader, ChangesetWriter};
use crate::types::RawChangeset;

const MAX_FILENAME_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemChangesetIO;

impl FileSystemChangesetIO {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ChangesetReader for FileSystemChangesetIO {
    fn list_changesets(
        &self,
        changeset_dir: &Path,
        config: &ChangesetConfig,
    ) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(changeset_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(OperationError::ChangesetList {
                    path: changeset_dir.to_path_buf(),
                    source,
                });
            }
        };

        let mut changesets = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|source| OperationError::ChangesetList {
                path: changeset_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if path.is_file() && config.is_changeset_file(&path) {
                changesets.push(path);
            }
        }

        changesets.sort();
        Ok(changesets)
    }

    fn read_changeset(&self, path: &Path) -> Result<RawChangeset> {
        let read_error = |source| OperationError::ChangesetFileRead {
            path: path.to_path_buf(),
            source,
        };

        let content = fs::read_to_string(path).map_err(read_error)?;
        let modified_at = fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(read_error)?;

        Ok(RawChangeset {
            path: path.to_path_buf(),
            content,
            modified_at,
        })
    }
}

impl ChangesetWriter for FileSystemChangesetIO {
    fn unique_filename(&self, changeset_dir: &Path, extension: &str) -> String {
        for _ in 0..MAX_FILENAME_ATTEMPTS {
            if let Some(name) = petname::petname(3, "-") {
                let filename = format!("{name}.{extension}");

                if !self.filename_exists(changeset_dir, &filename) {
                    return filename;
                }
            }
        }

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        format!("changeset-{timestamp}.{extension}")
    }

    fn filename_exists(&self, changeset_dir: &Path, filename: &str) -> bool {
        changeset_dir.join(filename).exists()
    }

    fn write_changeset(&self, path: &Path, content: &str) -> Result<()> {
        let write_error = |source| OperationError::ChangesetFileWrite {
            path: path.to_path_buf(),
            source,
        };

        let temp_path = temp_path_for(path);
        fs::write(&temp_path, content).map_err(write_error)?;

        if let Err(source) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_error(source));
        }

        Ok(())
    }

    fn delete_changeset(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|source| OperationError::ChangesetFileDelete {
            path: path.to_path_buf(),
            source,
        })
    }

    fn remove_temp_files(&self, changeset_dir: &Path) -> Result<usize> {
        let list_error = |source| OperationError::ChangesetList {
            path: changeset_dir.to_path_buf(),
            source,
        };

        let entries = match fs::read_dir(changeset_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(list_error(source)),
        };

        let mut removed = 0;
        for entry in entries {
            let path = entry.map_err(list_error)?.path();
            if !path.is_file() || !is_temp_path(&path) {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => return Err(OperationError::ChangesetFileDelete { path, source }),
            }
        }

        Ok(removed)
    }
}

/// Sibling of `path` that is never listed as a changeset.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "changeset".into(), |n| n.to_string_lossy());
    path.with_file_name(format!(".{name}.tmp"))
}

fn is_temp_path(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .is_some_and(|n| n.len() > ".tmp".len() + 1 && n.starts_with('.') && n.ends_with(".tmp"))
}
