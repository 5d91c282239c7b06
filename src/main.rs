use anyhow::Result;
use clap::Parser;
use tracing::debug;

use gsync::cli::Cli;
use gsync::commands::{SyncOptions, run_sync};
use gsync::config::Config;
use gsync::exit_code::ExitCode;
use gsync::git::SystemGit;
use gsync::logging;
use gsync::prompt::TerminalPrompter;

fn main() {
    let code = match run() {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            for cause in err.chain() {
                eprintln!("error: {}", cause);
            }
            ExitCode::from_error(&err)
        }
    };
    code.exit()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.explain {
        print_explanations();
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let options = SyncOptions::from_config(&config, cli.remote, cli.allow_clean);

    let mut git = SystemGit::new().with_program(config.git.as_str());
    if let Some(dir) = cli.dir {
        git = git.in_dir(dir);
    }

    let report = run_sync(&git, &TerminalPrompter, &cli.message, &options)?;
    debug!(?report, "sync finished");
    Ok(())
}

fn print_explanations() {
    println!("gsync runs one fixed sequence against the current branch:");
    println!();
    println!("  1. check   – git must be installed and you must be inside a working tree.");
    println!("  2. branch  – find the checked-out branch; asks you (default 'main') if it can't.");
    println!("  3. message – join the arguments into the commit message, or ask for one.");
    println!("  4. commit  – `git add -A` then `git commit -m <message>`.");
    println!("  5. fetch   – `git fetch <remote>`; a failure is a warning and skips step 6.");
    println!(
        "  6. rebase  – `git pull --rebase --autostash <remote> <branch>` if the remote branch exists."
    );
    println!(
        "  7. push    – `git push`, or `git push -u <remote> <branch>` when no upstream is set."
    );
    println!();
    println!("Any failure stops the run. Completed steps are not undone.");
}
