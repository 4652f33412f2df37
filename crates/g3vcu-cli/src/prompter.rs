//! Terminal implementation of the session `Prompter`

use g3vcu_core::{Prompter, Result, is_yes};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Line-based terminal prompter over stdin / stdout
pub struct CliPrompter;

impl CliPrompter {
    fn ask(&self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line)
    }
}

impl Prompter for CliPrompter {
    fn read_filename(&self, prompt: &str, _default: Option<&str>) -> Result<String> {
        self.ask(prompt)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.ask(prompt).map(|answer| is_yes(&answer))
    }

    fn read_line(&self, prompt: &str) -> Result<String> {
        self.ask(prompt)
    }

    fn display_message(&self, message: &str) {
        println!("{}", message);
    }

    fn display_warning(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}
