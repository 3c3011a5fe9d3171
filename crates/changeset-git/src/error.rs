use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound { refspec: String },

    #[error("no common ancestor between '{base}' and '{head}'")]
    NoMergeBase { base: String, head: String },

    #[error("remote '{name}' is not configured")]
    RemoteNotFound { name: String },

    #[error("failed to fetch '{refspec}' from '{remote}'")]
    Fetch {
        remote: String,
        refspec: String,
        #[source]
        source: git2::Error,
    },

    #[error("'{path}' at '{revision}' is not valid UTF-8")]
    NotUtf8 { path: PathBuf, revision: String },

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
