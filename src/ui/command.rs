//! Typed command parsing
//!
//! Raw input lines are parsed into [`Choice`] (selection screen) and
//! [`Command`] (operations screen) values before anything touches the
//! data-structure core.  Verbs are resolved per structure kind and integer
//! arguments are validated here, so the core never sees malformed input.

use crate::structures::StructureKind;
use std::fmt;

/// A fully validated operation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert (or push) a value.
    Insert(i32),
    /// Remove a value; a stack ignores the value and pops its top.
    Remove(i32),
    /// Report the top value of a stack without mutating it.
    Peek,
    /// Walk the structure in structure order.
    Traverse,
    /// Copy the current rendering into the output log.
    Display,
    /// Show the operation help.
    Help,
    /// Return to structure selection.
    Back,
    /// Quit the program.
    Exit,
}

/// An action on the structure-selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Structure(StructureKind),
    Help,
    Exit,
    Invalid,
}

/// Why an input line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownOperation(String),
    MissingValue(String),
    InvalidValue(String),
    TrailingInput(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Type 'help' for assistance."),
            ParseError::UnknownOperation(verb) => {
                write!(f, "Unknown operation '{}'. Type 'help' for assistance.", verb)
            }
            ParseError::MissingValue(verb) => {
                write!(f, "'{}' needs an integer value, e.g. '{} 5'.", verb, verb)
            }
            ParseError::InvalidValue(token) => {
                write!(f, "'{}' is not an integer value.", token)
            }
            ParseError::TrailingInput(rest) => {
                write!(f, "Unexpected trailing input: '{}'.", rest)
            }
        }
    }
}

/// Parse one selection-screen input line.
pub fn parse_choice(line: &str) -> Choice {
    match line.trim().to_lowercase().as_str() {
        "help" => Choice::Help,
        "exit" => Choice::Exit,
        other => match other.parse::<u32>() {
            Ok(code) => match StructureKind::from_choice(code) {
                Some(kind) => Choice::Structure(kind),
                None => Choice::Invalid,
            },
            Err(_) => Choice::Invalid,
        },
    }
}

/// Parse one operations-screen input line for the given structure kind.
pub fn parse(line: &str, kind: StructureKind) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let verb = match words.next() {
        Some(word) => word.to_lowercase(),
        None => return Err(ParseError::Empty),
    };
    let value = words.next();
    if let Some(rest) = words.next() {
        return Err(ParseError::TrailingInput(rest.to_string()));
    }

    match verb.as_str() {
        "add" | "push" => Ok(Command::Insert(parse_value(&verb, value)?)),
        // Pop always targets the top of the stack; the verb takes no value.
        "remove" | "pop" if kind == StructureKind::Stack => no_value(Command::Remove(0), value),
        "remove" | "pop" => Ok(Command::Remove(parse_value(&verb, value)?)),
        "peek" if kind == StructureKind::Stack => no_value(Command::Peek, value),
        "traverse" => no_value(Command::Traverse, value),
        "display" => no_value(Command::Display, value),
        "help" => no_value(Command::Help, value),
        "back" => no_value(Command::Back, value),
        "exit" => no_value(Command::Exit, value),
        _ => Err(ParseError::UnknownOperation(verb)),
    }
}

fn parse_value(verb: &str, token: Option<&str>) -> Result<i32, ParseError> {
    match token {
        None => Err(ParseError::MissingValue(verb.to_string())),
        Some(token) => token
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidValue(token.to_string())),
    }
}

fn no_value(command: Command, value: Option<&str>) -> Result<Command, ParseError> {
    match value {
        Some(token) => Err(ParseError::TrailingInput(token.to_string())),
        None => Ok(command),
    }
}
