//! Interactive prompt commands.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const HELP: &str = "\
commands:
  select <path>  pick an image
  send           classify the selected image
  status         show the screen
  help           show this message
  quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(PathBuf),
    Send,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "select" | "pick" => {
                if rest.is_empty() {
                    return Err(AppError::MissingArgument("select"));
                }
                Command::Select(PathBuf::from(rest))
            }
            "send" => Command::Send,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(AppError::unknown_command(verb)),
        };

        Ok(Some(command))
    }
}
