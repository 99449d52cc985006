//! Console command parsing.

use std::str::FromStr;

use thiserror::Error;

/// One line of user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    /// 1-based position in the last rendered list.
    Edit(usize),
    Delete(usize),
    Rate(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0} (type 'help' for a list)")]
    Unknown(String),
    #[error("'{0}' needs a ticket number, e.g. '{0} 1'")]
    MissingPosition(String),
    #[error("Invalid ticket number: {0}")]
    InvalidPosition(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let verb = verb.to_ascii_lowercase();

        let command = match verb.as_str() {
            "list" | "ls" => Command::List,
            "add" | "new" => Command::Add,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "edit" => Command::Edit(position(&verb, words.next())?),
            "delete" | "rm" => Command::Delete(position(&verb, words.next())?),
            "rate" => Command::Rate(position(&verb, words.next())?),
            _ => return Err(CommandError::Unknown(verb)),
        };
        Ok(command)
    }
}

fn position(verb: &str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or_else(|| CommandError::MissingPosition(verb.to_string()))?;
    match arg.trim_start_matches('#').parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidPosition(arg.to_string())),
    }
}

/// Text shown by `help`.
pub const HELP: &str = "\
Commands:
  list | ls          show all tickets
  add | new          create a ticket
  edit <n>           edit ticket n (not available once completed)
  delete <n> | rm <n>  delete ticket n
  rate <n>           rate completed ticket n (1-5)
  help               show this help
  quit | exit        leave

In forms: blank keeps the current value, '-' clears it, '.' cancels.";
