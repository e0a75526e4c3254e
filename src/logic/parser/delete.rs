//! Argument parser for the delete command.
//!
//! Preamble tokens select by 1-based displayed index: bare integers or
//! inclusive `start-end` ranges (pre-expanded, ascending). `n:NAME` tokens
//! (repeatable, values running until the next `n:`) select by exact name.
//! At least one selector is required. Index selectors come first in the
//! final list, then name selectors, each group in token order.

use crate::core::Name;
use crate::logic::commands::{CommandKind, Selector};
use crate::logic::error::ParseError;

pub(crate) const USAGE: &str = "delete: Deletes persons from the displayed list. \
Parameters: INDEX... | START-END | n:NAME...\n\
Example: delete 2 4-6 n:John Doe";

const NAME_PREFIX: &str = "n:";

pub(crate) fn parse(args: &str) -> Result<CommandKind, ParseError> {
    let (preamble, name_values) = split_names(args);

    let mut selectors = Vec::new();
    parse_indexes(&preamble, &mut selectors)?;
    for raw in name_values {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid_format());
        }
        let name = Name::parse(trimmed).map_err(|_| invalid_format())?;
        selectors.push(Selector::Name(name));
    }

    if selectors.is_empty() {
        return Err(invalid_format());
    }
    Ok(CommandKind::Delete(selectors))
}

fn invalid_format() -> ParseError {
    ParseError::InvalidFormat {
        usage: USAGE.into(),
    }
}

/// Split off `n:` values (each running until the next `n:`), leaving the
/// index preamble.
fn split_names(args: &str) -> (String, Vec<String>) {
    let mut positions = Vec::new();
    let mut from = 0;
    while let Some(found) = args[from..].find(NAME_PREFIX) {
        let pos = from + found;
        let at_token_start = args[..pos]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        if at_token_start {
            positions.push(pos);
        }
        from = pos + NAME_PREFIX.len();
    }

    let Some(&first) = positions.first() else {
        return (args.to_string(), Vec::new());
    };
    let preamble = args[..first].to_string();
    let values = positions
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            let end = positions.get(i + 1).copied().unwrap_or(args.len());
            args[pos + NAME_PREFIX.len()..end].to_string()
        })
        .collect();
    (preamble, values)
}

fn parse_indexes(preamble: &str, selectors: &mut Vec<Selector>) -> Result<(), ParseError> {
    for token in preamble.split_whitespace() {
        if token.contains('-') {
            let parts: Vec<&str> = token.split('-').collect();
            let &[start, end] = parts.as_slice() else {
                return Err(invalid_format());
            };
            let start = parse_index(start)?;
            let end = parse_index(end)?;
            if start > end {
                return Err(invalid_format());
            }
            selectors.extend((start..=end).map(Selector::Index));
        } else {
            selectors.push(Selector::Index(parse_index(token)?));
        }
    }
    Ok(())
}

/// A 1-based index: a positive integer token.
fn parse_index(token: &str) -> Result<usize, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(invalid_format());
    }
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid_format()),
    }
}
