//! Throwaway repositories for driving the gsync binary end to end.
//!
//! Layout under one temp dir:
//! - `seed/`: the repo the history starts in, on `main`
//! - `remote.git`: a bare clone of `seed`, used as `origin`
//! - one working clone per name passed to [`Sandbox::clone_remote`]

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub struct Sandbox {
    temp_dir: TempDir,
    pub root: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join("home")).expect("Failed to create home");

        let sandbox = Self { temp_dir, root };
        let seed = sandbox.root.join("seed");
        fs::create_dir_all(&seed).expect("Failed to create seed");
        sandbox.git(&seed, &["init"]);
        sandbox.git(&seed, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        fs::write(seed.join("README.md"), "# Test Repository\n").expect("Failed to write README");
        sandbox.git(&seed, &["add", "README.md"]);
        sandbox.git(&seed, &["commit", "-m", "Initial commit"]);
        sandbox.git(&sandbox.root, &["clone", "--bare", "seed", "remote.git"]);
        sandbox
    }

    pub fn remote(&self) -> PathBuf {
        self.root.join("remote.git")
    }

    pub fn clone_remote(&self, name: &str) -> PathBuf {
        self.git(&self.root, &["clone", "remote.git", name]);
        self.root.join(name)
    }

    /// A directory that is not inside any repository.
    pub fn plain_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).expect("Failed to create plain dir");
        dir
    }

    fn command(&self, program: &Path, dir: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.current_dir(dir)
            .env("HOME", self.root.join("home"))
            .env("XDG_CONFIG_HOME", self.root.join("home").join(".config"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", &self.root)
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_AUTHOR_EMAIL", "test@test.com")
            .env("GIT_COMMITTER_NAME", "Test User")
            .env("GIT_COMMITTER_EMAIL", "test@test.com")
            .env_remove("GSYNC_LOG");
        cmd
    }

    /// Runs git and panics on failure.
    pub fn git(&self, dir: &Path, args: &[&str]) -> String {
        let output = self
            .command(Path::new("git"), dir)
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Runs git and reports only whether it succeeded.
    pub fn git_ok(&self, dir: &Path, args: &[&str]) -> bool {
        self.command(Path::new("git"), dir)
            .args(args)
            .output()
            .expect("Failed to run git")
            .status
            .success()
    }

    /// Subject of the newest commit on `branch` in the bare remote.
    pub fn remote_subject(&self, branch: &str) -> String {
        self.git(&self.remote(), &["log", "-1", "--format=%s", branch])
    }

    pub fn gsync(&self, dir: &Path, args: &[&str]) -> Output {
        self.gsync_with_input(dir, args, None)
    }

    /// Runs the binary with `input` piped to stdin, or a closed stdin.
    pub fn gsync_with_input(&self, dir: &Path, args: &[&str], input: Option<&str>) -> Output {
        let mut cmd = self.command(Path::new(env!("CARGO_BIN_EXE_gsync")), dir);
        cmd.args(args)
            .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to spawn gsync");
        if let Some(input) = input {
            child
                .stdin
                .take()
                .expect("stdin is piped")
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
        child.wait_with_output().expect("Failed to wait for gsync")
    }
}

pub fn write(dir: &Path, file: &str, contents: &str) {
    fs::write(dir.join(file), contents).expect("Failed to write file");
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
