use std::io;
use std::path::PathBuf;
use std::process::{Command as StdCommand, Stdio};

use thiserror::Error;
use tracing::{debug, trace};

use crate::error::SyncError;

pub const NOT_IN_REPO_HINT: &str = "not inside a git working tree - cd into a repository first";
pub const NO_STAGED_HINT: &str = "nothing to commit - the working tree has no changes";

// A git command that runs and exits non-zero is not a ProcessError; it comes
// back as a GitOutput.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("'{program}' was not found - is git installed and on PATH?")]
    NotFound { program: String },
    #[error("failed to execute {program} {args}")]
    Spawn {
        program: String,
        args: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn trimmed_stdout(&self) -> &str {
        self.stdout.trim()
    }
}

pub trait GitClient {
    fn invoke(&self, args: &[&str]) -> Result<GitOutput, ProcessError>;
}

#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    dir: Option<PathBuf>,
}

impl SystemGit {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            dir: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitClient for SystemGit {
    fn invoke(&self, args: &[&str]) -> Result<GitOutput, ProcessError> {
        debug!(program = %self.program, args = %args.join(" "), "invoking git");

        let mut cmd = StdCommand::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ProcessError::NotFound {
                    program: self.program.clone(),
                }
            } else {
                ProcessError::Spawn {
                    program: self.program.clone(),
                    args: args.join(" "),
                    source,
                }
            }
        })?;

        trace!(status = ?output.status, "git exited");

        Ok(GitOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

pub fn run_git(git: &dyn GitClient, args: &[&str]) -> Result<String, SyncError> {
    let output = git.invoke(args)?;
    if output.success {
        Ok(output.stdout)
    } else {
        Err(command_failed(args, &output))
    }
}

pub fn git_succeeds(git: &dyn GitClient, args: &[&str]) -> Result<bool, SyncError> {
    Ok(git.invoke(args)?.success)
}

pub fn command_failed(args: &[&str], output: &GitOutput) -> SyncError {
    SyncError::Git {
        command: args.join(" "),
        detail: format!(
            "{}{}",
            format_stderr(&output.stderr),
            suggest_hint_for_git_error(&output.stderr, args)
        ),
    }
}

pub fn check_in_repo(git: &dyn GitClient) -> Result<(), SyncError> {
    let version = git.invoke(&["--version"]).map_err(SyncError::GitUnavailable)?;
    if !version.success {
        return Err(SyncError::GitUnusable {
            status: version
                .code
                .map_or_else(|| "a signal".to_string(), |code| code.to_string()),
            detail: format_stderr(&version.stderr),
        });
    }
    debug!(version = version.trimmed_stdout(), "git found");

    let inside = git.invoke(&["rev-parse", "--is-inside-work-tree"])?;
    if inside.success && inside.trimmed_stdout() == "true" {
        Ok(())
    } else {
        Err(SyncError::NotInRepo)
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n  {}", trimmed)
    }
}

pub fn suggest_hint_for_git_error(stderr: &str, args: &[&str]) -> String {
    let stderr_lower = stderr.to_lowercase();
    let cmd = args.first().copied().unwrap_or("");

    if stderr_lower.contains("not a git repository") {
        return format!("\n  hint: {}", NOT_IN_REPO_HINT);
    }

    if cmd == "commit"
        && (stderr_lower.contains("nothing to commit")
            || stderr_lower.contains("nothing added to commit"))
    {
        return format!("\n  hint: {}", NO_STAGED_HINT);
    }

    if cmd == "commit" && stderr_lower.contains("please tell me who you are") {
        return "\n  hint: set your identity with 'git config user.name' and 'git config user.email'"
            .to_string();
    }

    if cmd == "push" {
        if stderr_lower.contains("rejected") {
            return "\n  hint: remote has new commits - run gsync again to rebase onto them"
                .to_string();
        }
        if stderr_lower.contains("does not appear to be a git repository") {
            return "\n  hint: check the remote name with 'git remote -v'".to_string();
        }
    }

    if cmd == "pull" && stderr_lower.contains("conflict") {
        return "\n  hint: resolve the conflicts, then 'git rebase --continue' or 'git rebase --abort'"
            .to_string();
    }

    if stderr_lower.contains("could not resolve host") || stderr_lower.contains("network") {
        return "\n  hint: check your network connection".to_string();
    }

    if stderr_lower.contains("permission denied") {
        return "\n  hint: check file permissions or your remote credentials".to_string();
    }

    String::new()
}
