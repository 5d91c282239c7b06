use thiserror::Error;

use crate::git::{NOT_IN_REPO_HINT, NO_STAGED_HINT, ProcessError};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("git is not available")]
    GitUnavailable(#[source] ProcessError),

    #[error("git is not usable: 'git --version' exited with {status}{detail}")]
    GitUnusable { status: String, detail: String },

    #[error("{}", NOT_IN_REPO_HINT)]
    NotInRepo,

    #[error("commit message cannot be empty")]
    EmptyMessage,

    #[error("{}", NO_STAGED_HINT)]
    NothingToCommit,

    #[error("commit failed")]
    CommitFailed(#[source] Box<SyncError>),

    #[error("rebase onto {remote}/{branch} failed")]
    RebaseFailed {
        remote: String,
        branch: String,
        #[source]
        source: Box<SyncError>,
    },

    #[error("push to {remote} failed")]
    PushFailed {
        remote: String,
        #[source]
        source: Box<SyncError>,
    },

    #[error("git {command} failed:{detail}")]
    Git { command: String, detail: String },

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("failed to read input")]
    Prompt(#[source] std::io::Error),
}
