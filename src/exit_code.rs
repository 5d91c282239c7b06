// Exit codes for gsync.
//
//   0 = success
//   1 = general error
//   2 = input error (empty commit message, unreadable prompt)
//   3 = environment error (git missing, not in a working tree)
//   4 = nothing to commit
//   5 = commit failed
//   6 = rebase onto the remote branch failed
//   7 = push failed

use std::process;

use crate::error::SyncError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    Error = 1,
    Input = 2,
    Environment = 3,
    NothingToCommit = 4,
    CommitFailed = 5,
    RebaseFailed = 6,
    PushFailed = 7,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_error(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<SyncError>())
            .map(Self::from_sync_error)
            .unwrap_or(Self::Error)
    }

    pub fn from_sync_error(err: &SyncError) -> Self {
        match err {
            SyncError::GitUnavailable(_) | SyncError::GitUnusable { .. } | SyncError::NotInRepo => {
                Self::Environment
            }
            SyncError::EmptyMessage | SyncError::Prompt(_) => Self::Input,
            SyncError::NothingToCommit => Self::NothingToCommit,
            SyncError::CommitFailed(_) => Self::CommitFailed,
            SyncError::RebaseFailed { .. } => Self::RebaseFailed,
            SyncError::PushFailed { .. } => Self::PushFailed,
            SyncError::Git { .. } | SyncError::Process(_) => Self::Error,
        }
    }

    pub fn exit(self) -> ! {
        process::exit(self.code())
    }
}
