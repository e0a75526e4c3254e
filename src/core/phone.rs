//! Phone number value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidPhone};

/// Phone number - digits only, at least 3 of them.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MIN_DIGITS: usize = 3;

    /// Parse and validate a phone number string.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidPhone { raw: s }.into())
        }
    }

    /// Returns true if the given string is a valid phone number.
    pub fn is_valid(s: &str) -> bool {
        s.len() >= Self::MIN_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone({:?})", self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Phone::parse(s)
    }
}

impl From<Phone> for String {
    fn from(p: Phone) -> String {
        p.0
    }
}
