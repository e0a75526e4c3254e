//! Person name value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidName};

/// Person name - letters, spaces and a small set of punctuation.
///
/// Allowed characters: letters (any script, no digits), spaces, apostrophes
/// (`'`, `\u{2018}`, `\u{2019}`, `\u{02BC}`), hyphens, periods, and slashes.
/// The first character must not be whitespace, and the whole name is capped
/// at [`Name::MAX_LEN`] characters.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 500;

    /// Parse and validate a name string.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidName { raw: s }.into())
        }
    }

    /// Returns true if the given string is a valid name.
    pub fn is_valid(s: &str) -> bool {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if first == ' ' || !is_name_char(first) {
            return false;
        }
        if !chars.all(is_name_char) {
            return false;
        }
        s.chars().count() <= Self::MAX_LEN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic()
        || matches!(
            c,
            ' ' | '-' | '.' | '/' | '\'' | '\u{2018}' | '\u{2019}' | '\u{02BC}'
        )
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Name::parse(s)
    }
}

impl From<Name> for String {
    fn from(n: Name) -> String {
        n.0
    }
}
