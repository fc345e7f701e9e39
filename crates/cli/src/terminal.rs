use album_core::prompt::{is_affirmative, Prompter};
use anyhow::{bail, Result};
use std::io::{self, BufRead, Write};

/// Prompts on stdout and reads answers line by line from stdin.
pub struct TerminalPrompter<R> {
    input: R,
}

impl TerminalPrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> TerminalPrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead> Prompter for TerminalPrompter<R> {
    fn ask_text(&mut self, question: &str) -> Result<String> {
        print!("{}", question);
        io::stdout().flush()?;
        self.read_line()
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        print!("{} (yes/no): ", question);
        io::stdout().flush()?;
        Ok(is_affirmative(&self.read_line()?))
    }
}
