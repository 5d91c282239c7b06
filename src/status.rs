use std::path::Path;

use tracing::debug;

use crate::error::SyncError;
use crate::git::{GitClient, git_succeeds};
use crate::prompt::Prompter;

pub struct BranchStrategy {
    pub name: &'static str,
    pub args: &'static [&'static str],
}

// Tried in order; the first usable answer wins.
pub const BRANCH_STRATEGIES: &[BranchStrategy] = &[
    BranchStrategy {
        name: "symbolic-ref",
        args: &["symbolic-ref", "--quiet", "--short", "HEAD"],
    },
    BranchStrategy {
        name: "branch --show-current",
        args: &["branch", "--show-current"],
    },
    BranchStrategy {
        name: "rev-parse --abbrev-ref",
        args: &["rev-parse", "--abbrev-ref", "HEAD"],
    },
];

impl BranchStrategy {
    pub fn attempt(&self, git: &dyn GitClient) -> Option<String> {
        let output = match git.invoke(self.args) {
            Ok(output) => output,
            Err(err) => {
                debug!(strategy = self.name, error = %err, "branch strategy could not run");
                return None;
            }
        };
        if !output.success {
            debug!(strategy = self.name, code = ?output.code, "branch strategy failed");
            return None;
        }

        let branch = output.trimmed_stdout();
        if branch.is_empty() || branch == "HEAD" {
            debug!(strategy = self.name, "branch strategy gave no usable name");
            None
        } else {
            Some(branch.to_string())
        }
    }
}

pub fn detect_current_branch(git: &dyn GitClient) -> Option<String> {
    BRANCH_STRATEGIES.iter().find_map(|strategy| {
        let branch = strategy.attempt(git)?;
        debug!(strategy = strategy.name, branch = %branch, "resolved current branch");
        Some(branch)
    })
}

pub fn resolve_branch(
    git: &dyn GitClient,
    prompt: &dyn Prompter,
    default_branch: &str,
) -> Result<String, SyncError> {
    if let Some(branch) = detect_current_branch(git) {
        return Ok(branch);
    }

    let answer = prompt
        .input(
            "Could not determine current branch. Enter branch name",
            Some(default_branch),
        )
        .map_err(SyncError::Prompt)?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default_branch.to_string())
    } else {
        Ok(answer.to_string())
    }
}

pub fn remote_branch_exists(git: &dyn GitClient, remote: &str, branch: &str) -> Result<bool, SyncError> {
    let reference = format!("refs/remotes/{}/{}", remote, branch);
    git_succeeds(git, &["show-ref", "--verify", "--quiet", reference.as_str()])
}

pub fn upstream(git: &dyn GitClient) -> Result<Option<String>, SyncError> {
    let output = git.invoke(&["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"])?;
    let name = output.trimmed_stdout();
    if output.success && !name.is_empty() {
        Ok(Some(name.to_string()))
    } else {
        Ok(None)
    }
}

pub fn rebase_in_progress(git: &dyn GitClient) -> Result<bool, SyncError> {
    let output = git.invoke(&["rev-parse", "--absolute-git-dir"])?;
    if !output.success || output.trimmed_stdout().is_empty() {
        return Ok(false);
    }
    let git_dir = Path::new(output.trimmed_stdout());
    Ok(git_dir.join("rebase-merge").is_dir() || git_dir.join("rebase-apply").is_dir())
}

// Exits 1 when the index differs from HEAD.
pub fn has_staged_changes(git: &dyn GitClient) -> Result<bool, SyncError> {
    Ok(!git_succeeds(git, &["diff", "--cached", "--quiet"])?)
}
