//! Argument parser for the listsession command.

use crate::core::Session;
use crate::logic::commands::CommandKind;
use crate::logic::error::ParseError;

pub(crate) const USAGE: &str = "listsession: Lists all persons in the given session.\n\
Parameters: SESSION\n\
Example: listsession G1";

pub(crate) fn parse(args: &str) -> Result<CommandKind, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: USAGE.into(),
        });
    }
    if !Session::is_valid(trimmed) {
        return Err(ParseError::InvalidSessionFormat);
    }
    let session = Session::parse(trimmed).expect("validated session parses");
    Ok(CommandKind::ListSession(session))
}
