use std::path::PathBuf;

use crate::{FileChange, FileStatus, GitError, Result};

use super::Repository;

impl Repository {
    /// Files changed on `head` since it diverged from `base`.
    ///
    /// The diff runs from the merge base of both revisions to `head`, so
    /// commits that landed on `base` after the branch point are not reported.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either revision cannot be resolved
    /// and [`GitError::NoMergeBase`] if the histories are unrelated.
    pub fn changed_files(&self, base: &str, head: &str) -> Result<Vec<FileChange>> {
        let base_commit = self.resolve_commit(base)?;
        let head_commit = self.resolve_commit(head)?;

        let merge_base = self
            .inner
            .merge_base(base_commit.id(), head_commit.id())
            .map_err(|_| GitError::NoMergeBase {
                base: base.to_string(),
                head: head.to_string(),
            })?;

        let base_tree = self.inner.find_commit(merge_base)?.tree()?;
        let head_tree = head_commit.tree()?;

        let mut diff = self
            .inner
            .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                git2::Delta::Renamed => FileStatus::Renamed,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            let mut change = FileChange::new(path, status);

            if status == FileStatus::Renamed {
                if let Some(old_path) = delta.old_file().path() {
                    change = change.with_old_path(old_path.to_path_buf());
                }
            }

            changes.push(change);
        }

        Ok(changes)
    }
}
