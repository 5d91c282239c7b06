use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "gsync",
    about = "Stage everything, commit, rebase onto the remote branch, and push",
    version
)]
pub struct Cli {
    /// Commit message; the words are joined with spaces. Prompts when omitted.
    #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,

    /// Remote to fetch from and push to (default from config, else "origin").
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Keep going to fetch/rebase/push when there is nothing to commit.
    #[arg(long)]
    pub allow_clean: bool,

    /// Run as if started in this directory.
    #[arg(short = 'C', value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// -v for debug logs, -vv for trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long)]
    pub explain: bool,
}
