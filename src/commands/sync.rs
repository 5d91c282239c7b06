use tracing::{debug, info};

use super::commit::{CommitOutcome, resolve_message, stage_and_commit};
use crate::config::Config;
use crate::error::SyncError;
use crate::git::{GitClient, check_in_repo, run_git};
use crate::prompt::Prompter;
use crate::status::{rebase_in_progress, remote_branch_exists, resolve_branch, upstream};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub remote: String,
    pub default_branch: String,
    pub autostash: bool,
    pub allow_clean: bool,
}

impl SyncOptions {
    pub fn from_config(config: &Config, remote: Option<String>, allow_clean: bool) -> Self {
        Self {
            remote: remote.unwrap_or_else(|| config.remote.clone()),
            default_branch: config.default_branch.clone(),
            autostash: config.autostash,
            allow_clean: allow_clean || config.sync_when_clean,
        }
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self::from_config(&Config::default(), None, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebaseOutcome {
    Rebased,
    Skipped,
    // Fetch failed, so the pull would have failed the same way.
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed { upstream: String },
    PushedWithUpstream { upstream: String },
}

impl PushOutcome {
    pub fn upstream(&self) -> &str {
        match self {
            PushOutcome::Pushed { upstream } | PushOutcome::PushedWithUpstream { upstream } => {
                upstream
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub branch: String,
    pub message: String,
    pub commit: CommitOutcome,
    pub rebase: RebaseOutcome,
    pub push: PushOutcome,
}

pub fn run_sync(
    git: &dyn GitClient,
    prompt: &dyn Prompter,
    words: &[String],
    options: &SyncOptions,
) -> Result<SyncReport, SyncError> {
    check_in_repo(git)?;

    let branch = resolve_branch(git, prompt, &options.default_branch)?;
    info!(branch = %branch, remote = %options.remote, "starting sync");
    println!("→ On branch {}", branch);

    let message = resolve_message(words, prompt)?;
    let commit = stage_and_commit(git, &message, options.allow_clean)?;
    let rebase = synchronize(git, &options.remote, &branch, options.autostash)?;
    let push = push_branch(git, &options.remote, &branch)?;

    let rebase_note = match rebase {
        RebaseOutcome::Rebased => "rebased",
        RebaseOutcome::Skipped => "no remote branch to rebase onto",
        RebaseOutcome::Offline => "not rebased, fetch failed",
    };
    println!(
        "✓ Sync complete: {} → {} ({})",
        branch,
        push.upstream(),
        rebase_note
    );

    Ok(SyncReport {
        branch,
        message,
        commit,
        rebase,
        push,
    })
}

pub fn synchronize(
    git: &dyn GitClient,
    remote: &str,
    branch: &str,
    autostash: bool,
) -> Result<RebaseOutcome, SyncError> {
    println!("→ Fetching from {}...", remote);
    if let Err(e) = run_git(git, &["fetch", remote]) {
        debug!(remote, error = %e, "fetch failed, continuing");
        eprintln!("⚠ Fetch failed: {}", e);
        eprintln!("  Continuing with local state, skipping rebase...");
        return Ok(RebaseOutcome::Offline);
    }
    println!("✓ Fetch complete");

    if !remote_branch_exists(git, remote, branch)? {
        println!("→ No {}/{} yet, skipping rebase", remote, branch);
        return Ok(RebaseOutcome::Skipped);
    }

    println!("→ Rebasing onto {}/{}...", remote, branch);
    let mut args = vec!["pull", "--rebase"];
    if autostash {
        args.push("--autostash");
    }
    args.push(remote);
    args.push(branch);

    if let Err(e) = run_git(git, &args) {
        eprintln!("✗ Rebase onto {}/{} failed", remote, branch);
        if rebase_in_progress(git)? {
            eprintln!("  Resolve it manually:");
            eprintln!("    1. Fix the conflicting files (marked with <<<<<<<)");
            eprintln!("    2. Stage them with 'git add <file>'");
            eprintln!("    3. Run 'git rebase --continue', or 'git rebase --abort' to give up");
        }
        return Err(SyncError::RebaseFailed {
            remote: remote.to_string(),
            branch: branch.to_string(),
            source: Box::new(e),
        });
    }

    println!("✓ Rebase complete");
    Ok(RebaseOutcome::Rebased)
}

pub fn push_branch(git: &dyn GitClient, remote: &str, branch: &str) -> Result<PushOutcome, SyncError> {
    let (args, outcome) = match upstream(git)? {
        Some(upstream) => {
            println!("→ Pushing to {}...", upstream);
            (vec!["push"], PushOutcome::Pushed { upstream })
        }
        None => {
            println!("→ Pushing to {}/{} and setting upstream...", remote, branch);
            (
                vec!["push", "-u", remote, branch],
                PushOutcome::PushedWithUpstream {
                    upstream: format!("{}/{}", remote, branch),
                },
            )
        }
    };

    run_git(git, &args).map_err(|e| SyncError::PushFailed {
        remote: remote.to_string(),
        source: Box::new(e),
    })?;

    println!("✓ Pushed successfully");
    Ok(outcome)
}
