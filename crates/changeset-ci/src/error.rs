use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] changeset_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to read description from standard input")]
    Stdin(#[source] std::io::Error),

    /// The check ran and the pull request did not pass.
    #[error("changeset verification failed: {reason}")]
    VerificationFailed { reason: &'static str },
}

pub type Result<T> = std::result::Result<T, CliError>;
