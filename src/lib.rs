pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod git;
pub mod logging;
pub mod prompt;
pub mod status;
