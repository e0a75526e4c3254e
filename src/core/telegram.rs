//! Telegram handle value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidTelegram};

/// Telegram handle - `@` followed by 5-32 letters, digits or underscores,
/// the first of which must be a letter.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TelegramHandle(String);

impl TelegramHandle {
    pub const MIN_LEN: usize = 5;
    pub const MAX_LEN: usize = 32;

    /// Parse and validate a telegram handle string.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidTelegram { raw: s }.into())
        }
    }

    /// Returns true if the given string is a valid telegram handle.
    pub fn is_valid(s: &str) -> bool {
        let Some(body) = s.strip_prefix('@') else {
            return false;
        };
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&body.len()) {
            return false;
        }
        let bytes = body.as_bytes();
        bytes[0].is_ascii_alphabetic()
            && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TelegramHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TelegramHandle({:?})", self.0)
    }
}

impl fmt::Display for TelegramHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TelegramHandle {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        TelegramHandle::parse(s)
    }
}

impl From<TelegramHandle> for String {
    fn from(t: TelegramHandle) -> String {
        t.0
    }
}
