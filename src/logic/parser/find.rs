//! Argument parser for the find command.

use crate::logic::commands::CommandKind;
use crate::logic::error::ParseError;

pub(crate) fn parse(args: &str) -> Result<CommandKind, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyKeyword);
    }

    // Collapse whitespace runs so "John   Doe" matches "John Doe".
    let normalized = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    if !normalized.chars().all(is_keyword_char) {
        return Err(ParseError::InvalidKeyword);
    }

    Ok(CommandKind::Find(normalized))
}

/// Keyword allow-list: ASCII letters (no digits), spaces, apostrophe
/// variants, hyphen, period, slash. Matches the name alphabet's ASCII core.
fn is_keyword_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            ' ' | '-' | '.' | '\'' | '/' | '\u{2018}' | '\u{2019}' | '\u{02BC}'
        )
}
