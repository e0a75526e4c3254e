//! Class session value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidSession};

/// Class session identifier.
///
/// Format: 1-2 uppercase letters, then a number 1-99 (leading zero allowed
/// for 1-9), then an optional trailing uppercase letter.
/// Examples: G1, F01, T07, BA03, BD04, T07B.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Session(String);

impl Session {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Sessions must be 1\u{2013}2 uppercase \
        letters, followed by 1\u{2013}99 (leading zero allowed for 1\u{2013}9), with an \
        optional trailing uppercase letter (e.g., G1, F01, T07, BA03, BD04, T07B).";

    /// Parse and validate a session string.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidSession { raw: s }.into())
        }
    }

    /// Returns true if the given string is a valid session identifier.
    pub fn is_valid(s: &str) -> bool {
        let bytes = s.as_bytes();
        let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
        if !(1..=2).contains(&letters) {
            return false;
        }
        let rest = &bytes[letters..];
        let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        let number = &rest[..digits];
        let ok_number = match number {
            [d] => (b'1'..=b'9').contains(d),
            [b'0', d] => (b'1'..=b'9').contains(d),
            [d1, _] => (b'1'..=b'9').contains(d1),
            _ => false,
        };
        if !ok_number {
            return false;
        }
        match &rest[digits..] {
            [] => true,
            [suffix] => suffix.is_ascii_uppercase(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session({:?})", self.0)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Session {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Session::parse(s)
    }
}

impl From<Session> for String {
    fn from(s: Session) -> String {
        s.0
    }
}
