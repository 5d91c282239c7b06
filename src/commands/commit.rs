use tracing::{debug, info};

use crate::error::SyncError;
use crate::git::{GitClient, run_git};
use crate::prompt::Prompter;
use crate::status::has_staged_changes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    NothingStaged,
}

pub fn resolve_message(words: &[String], prompt: &dyn Prompter) -> Result<String, SyncError> {
    let message = if words.is_empty() {
        prompt
            .input("Commit message", None)
            .map_err(SyncError::Prompt)?
    } else {
        words.join(" ")
    };

    if message.trim().is_empty() {
        return Err(SyncError::EmptyMessage);
    }
    Ok(message)
}

pub fn stage_and_commit(
    git: &dyn GitClient,
    message: &str,
    allow_clean: bool,
) -> Result<CommitOutcome, SyncError> {
    run_git(git, &["add", "-A"])?;
    println!("→ Staged all changes");

    if !has_staged_changes(git)? {
        if allow_clean {
            println!("⚠ Nothing to commit, continuing to sync");
            info!("index matches HEAD, skipping commit");
            return Ok(CommitOutcome::NothingStaged);
        }
        return Err(SyncError::NothingToCommit);
    }

    println!("→ Committing...");
    debug!(commit_message = message, "committing");
    run_git(git, &["commit", "-m", message]).map_err(|e| SyncError::CommitFailed(Box::new(e)))?;
    println!("✓ Commit created");
    Ok(CommitOutcome::Committed)
}
