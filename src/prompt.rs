use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

pub trait Prompter {
    /// An empty answer yields `default` if given, else the empty string.
    fn input(&self, prompt: &str, default: Option<&str>) -> io::Result<String>;
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> io::Result<String> {
        if !io::stdin().is_terminal() {
            return read_piped_line(prompt, default, &mut io::stdin().lock());
        }

        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(io::Error::other)
    }
}

fn read_piped_line(prompt: &str, default: Option<&str>, reader: &mut impl BufRead) -> io::Result<String> {
    match default {
        Some(default) => eprint!("{} [{}]: ", prompt, default),
        None => eprint!("{}: ", prompt),
    }
    io::stderr().flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let answer = line.trim_end_matches(['\r', '\n']);

    match default {
        Some(default) if answer.trim().is_empty() => Ok(default.to_string()),
        _ => Ok(answer.to_string()),
    }
}
