//! Argument parser for the add command.
//!
//! Prefixed arguments (`n/`, `p/`, `e/`, `t/`, `tg/`, `s/`), recognized only
//! at token starts; a value runs until the next prefix. Each value goes
//! through its field validator, so constraint messages surface verbatim.

use crate::core::{Email, Name, Person, PersonType, Phone, Session, TelegramHandle};
use crate::logic::commands::CommandKind;
use crate::logic::error::ParseError;

pub(crate) const USAGE: &str = "add: Adds a person to the contact list. \
Parameters: n/NAME p/PHONE e/EMAIL t/TYPE [tg/TELEGRAM] [s/SESSION]\n\
Example: add n/John Doe p/98765432 e/johnd@example.com t/student tg/@johndoe s/G1";

const PREFIXES: [&str; 6] = ["n/", "p/", "e/", "t/", "tg/", "s/"];

pub(crate) fn parse(args: &str) -> Result<CommandKind, ParseError> {
    let hits = scan_prefixes(args);
    let Some(first) = hits.first() else {
        return Err(invalid_format());
    };
    if !args[..first.pos].trim().is_empty() {
        return Err(invalid_format());
    }

    let mut values: Vec<(&'static str, &str)> = Vec::with_capacity(hits.len());
    for (i, hit) in hits.iter().enumerate() {
        let end = hits.get(i + 1).map_or(args.len(), |next| next.pos);
        let value = args[hit.pos + hit.prefix.len()..end].trim();
        values.push((hit.prefix, value));
    }

    let duplicated: Vec<&str> = PREFIXES
        .iter()
        .copied()
        .filter(|prefix| values.iter().filter(|(p, _)| p == prefix).count() > 1)
        .collect();
    if !duplicated.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: format!(
                "Multiple values specified for the following single-valued field(s): {}",
                duplicated.join(" ")
            ),
        });
    }

    let value_of = |prefix: &str| values.iter().find(|(p, _)| *p == prefix).map(|(_, v)| *v);

    let name = Name::parse(value_of("n/").ok_or_else(invalid_format)?)?;
    let phone = Phone::parse(value_of("p/").ok_or_else(invalid_format)?)?;
    let email = Email::parse(value_of("e/").ok_or_else(invalid_format)?)?;
    let person_type = PersonType::parse(value_of("t/").ok_or_else(invalid_format)?)?;
    let telegram = value_of("tg/").map(TelegramHandle::parse).transpose()?;
    let session = value_of("s/").map(Session::parse).transpose()?;

    Ok(CommandKind::Add(Box::new(Person::new(
        name,
        phone,
        email,
        person_type,
        telegram,
        session,
    ))))
}

fn invalid_format() -> ParseError {
    ParseError::InvalidFormat {
        usage: USAGE.into(),
    }
}

struct PrefixHit {
    pos: usize,
    prefix: &'static str,
}

/// Positions of every prefix occurring at a token start, in line order.
fn scan_prefixes(args: &str) -> Vec<PrefixHit> {
    let mut hits = Vec::new();
    for prefix in PREFIXES {
        let mut from = 0;
        while let Some(found) = args[from..].find(prefix) {
            let pos = from + found;
            let at_token_start = args[..pos]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace);
            if at_token_start {
                hits.push(PrefixHit { pos, prefix });
            }
            from = pos + prefix.len();
        }
    }
    hits.sort_by_key(|hit| hit.pos);
    hits
}
