//! Line parsing: raw input to a typed [`Command`].
//!
//! The first whitespace run splits the line into a command word and the
//! remainder; the word is matched case-sensitively against a fixed table
//! (including the `del`/`rm` delete aliases) and the remainder is handed to
//! the matching per-command parser. Every parsed command is tagged with the
//! raw command word as its undo label, alias spelling preserved.

mod add;
mod delete;
mod export;
mod find;
mod session;
mod undo;

use tracing::debug;

use crate::logic::commands::{Command, CommandKind};
use crate::logic::error::ParseError;

pub(crate) const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

/// Parse one input line into a command.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: HELP_USAGE.into(),
        });
    }

    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    debug!(command_word = word, "parsing command");

    let kind = match word {
        "add" => add::parse(rest)?,
        "delete" | "del" | "rm" => delete::parse(rest)?,
        "clear" => CommandKind::Clear,
        "find" => find::parse(rest)?,
        "list" => CommandKind::List,
        "listsession" => session::parse(rest)?,
        "sessions" => CommandKind::Sessions,
        "export" => export::parse(rest)?,
        "undo" => undo::parse(rest)?,
        "help" => CommandKind::Help,
        "exit" => CommandKind::Exit,
        _ => {
            debug!(input = trimmed, "unknown command word");
            return Err(ParseError::UnknownCommand);
        }
    };

    Ok(Command::new(kind, word))
}
