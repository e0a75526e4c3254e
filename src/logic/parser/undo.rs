//! Argument parser for undo and undo-delete.
//!
//! A bare `undo` is the generic undo. `undo delete` (or the delete aliases
//! `del`/`rm`) targets the most recent delete batch instead. Anything else
//! after `undo` is rejected.

use crate::logic::commands::CommandKind;
use crate::logic::error::ParseError;

pub(crate) const USAGE: &str = "undo: Undoes the most recent command that modified data.\n\
undo delete: Restores the most recent delete operation.\n\
Examples:\n\
undo\n\
undo delete\n\
undo del\n\
undo rm";

pub(crate) fn parse(args: &str) -> Result<CommandKind, ParseError> {
    match args.trim() {
        "" => Ok(CommandKind::Undo),
        "delete" | "del" | "rm" => Ok(CommandKind::UndoDelete),
        _ => Err(ParseError::InvalidFormat {
            usage: USAGE.into(),
        }),
    }
}
