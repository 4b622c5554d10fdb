//! Parsing of editor input lines.

use crate::error::DromError;
use crate::hex::Edge;
use std::str::FromStr;
use thiserror::Error;

/// A single editor command.
///
/// Commands that take an argument accept it inline (`remove 3`); when it is
/// missing the editor asks for it on the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Glue a new hexagon onto this edge of the current one
    Add(Edge),
    ChangeHex(Option<usize>),
    Remove(Option<usize>),
    RemoveLast,
    /// Print the vertices of the current hexagon
    Print,
    PrintFull,
    ShowAll,
    Save(Option<String>),
    Load(Option<String>),
    Help,
    Quit,
}

/// Rejected input. The editor prints it and returns to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("No {field} given")]
    Empty { field: &'static str },

    #[error("Invalid {field} '{input}': not a number")]
    NotANumber { field: &'static str, input: String },

    #[error("Invalid {field} '{input}': must not be negative")]
    Negative { field: &'static str, input: String },

    #[error("Invalid edge '{input}': {source}")]
    InvalidEdge { input: String, source: DromError },

    #[error("Input '{0}' not recognized, type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("'{command}' takes no argument (got '{argument}')")]
    UnexpectedArgument { command: String, argument: String },
}

impl Command {
    /// Name as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(edge) => edge.name(),
            Command::ChangeHex(_) => "change_hex",
            Command::Remove(_) => "remove",
            Command::RemoveLast => "remove_last",
            Command::Print => "print",
            Command::PrintFull => "print_full",
            Command::ShowAll => "show_all",
            Command::Save(_) => "save",
            Command::Load(_) => "load",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    /// Whether the command can change the arrangement or the current hexagon.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::ChangeHex(_)
                | Command::Remove(_)
                | Command::RemoveLast
                | Command::Load(_)
        )
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (word, argument) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim()).filter(|rest| !rest.is_empty())),
            None => (trimmed, None),
        };
        let word = word.to_lowercase();

        let no_argument = |command: Command| match argument {
            Some(argument) => Err(InputError::UnexpectedArgument {
                command: word.clone(),
                argument: argument.to_string(),
            }),
            None => Ok(command),
        };

        match word.as_str() {
            "" => Err(InputError::Empty { field: "command" }),
            "change_hex" => Ok(Command::ChangeHex(
                argument.map(|arg| parse_index("index", arg)).transpose()?,
            )),
            "remove" => Ok(Command::Remove(
                argument.map(|arg| parse_index("index", arg)).transpose()?,
            )),
            "save" => Ok(Command::Save(argument.map(str::to_string))),
            "load" => Ok(Command::Load(argument.map(str::to_string))),
            "remove_last" => no_argument(Command::RemoveLast),
            "print" => no_argument(Command::Print),
            "print_full" => no_argument(Command::PrintFull),
            "show_all" => no_argument(Command::ShowAll),
            "help" => no_argument(Command::Help),
            "quit" => no_argument(Command::Quit),
            other => match other.parse::<Edge>() {
                Ok(edge) => no_argument(Command::Add(edge)),
                Err(_) => match other.parse::<usize>() {
                    Ok(index) => Err(InputError::InvalidEdge {
                        input: other.to_string(),
                        source: DromError::InvalidEdge(index),
                    }),
                    Err(_) => Err(InputError::UnknownCommand(trimmed.to_string())),
                },
            },
        }
    }
}

/// Parses a hexagon index typed by the user.
pub fn parse_index(field: &'static str, input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty { field });
    }
    match input.parse::<usize>() {
        Ok(index) => Ok(index),
        Err(_) if input.parse::<i64>().is_ok() => Err(InputError::Negative {
            field,
            input: input.to_string(),
        }),
        Err(_) => Err(InputError::NotANumber {
            field,
            input: input.to_string(),
        }),
    }
}
