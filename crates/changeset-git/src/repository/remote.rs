use crate::{GitError, Repository, Result};

pub const DEFAULT_REMOTE: &str = "origin";

impl Repository {
    /// Fetches a branch into `refs/remotes/<remote>/<branch>`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RemoteNotFound`] if the remote is not configured and
    /// [`GitError::Fetch`] if the transfer fails.
    pub fn fetch_branch(&self, remote: &str, branch: &str) -> Result<()> {
        let refspec = format!("+refs/heads/{branch}:refs/remotes/{remote}/{branch}");
        self.fetch_refspec(remote, &refspec)
    }

    /// Fetches a single revision (commit id or ref name) so it resolves locally.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RemoteNotFound`] if the remote is not configured and
    /// [`GitError::Fetch`] if the transfer fails.
    pub fn fetch_revision(&self, remote: &str, revision: &str) -> Result<()> {
        self.fetch_refspec(remote, revision)
    }

    fn fetch_refspec(&self, remote_name: &str, refspec: &str) -> Result<()> {
        let mut remote =
            self.inner
                .find_remote(remote_name)
                .map_err(|_| GitError::RemoteNotFound {
                    name: remote_name.to_string(),
                })?;

        let config = self.inner.config()?;
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(move |url, username, allowed| {
            if allowed.contains(git2::CredentialType::SSH_KEY) {
                if let Some(username) = username {
                    return git2::Cred::ssh_key_from_agent(username);
                }
            }
            if allowed.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                return git2::Cred::credential_helper(&config, url, username);
            }
            git2::Cred::default()
        });

        let mut options = git2::FetchOptions::new();
        options.remote_callbacks(callbacks);

        remote
            .fetch(&[refspec], Some(&mut options), None)
            .map_err(|source| GitError::Fetch {
                remote: remote_name.to_string(),
                refspec: refspec.to_string(),
                source,
            })
    }
}
