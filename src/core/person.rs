//! The person record and its type classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::error::{CoreError, InvalidPersonType};
use super::name::Name;
use super::phone::Phone;
use super::session::Session;
use super::telegram::TelegramHandle;

/// Contact classification.
///
/// Students and TAs carry a session; instructors and staff must not.
/// That cross-field rule is enforced at command execution, not construction,
/// so storage can surface it as a data constraint with a precise message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    Student,
    Ta,
    Instructor,
    Staff,
}

impl PersonType {
    /// Parse the lowercase type word.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "student" => Ok(Self::Student),
            "ta" => Ok(Self::Ta),
            "instructor" => Ok(Self::Instructor),
            "staff" => Ok(Self::Staff),
            _ => Err(InvalidPersonType { raw: s.to_string() }.into()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Ta => "ta",
            Self::Instructor => "instructor",
            Self::Staff => "staff",
        }
    }

    /// Whether this type requires a session (students and TAs).
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Student | Self::Ta)
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable contact record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    #[serde(rename = "type")]
    pub person_type: PersonType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        person_type: PersonType,
        telegram: Option<TelegramHandle>,
        session: Option<Session>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            person_type,
            telegram,
            session,
        }
    }

    /// Duplicate identity: all visible fields equal, or the emails match.
    ///
    /// The email clause is what keeps one address from belonging to two
    /// different records.
    pub fn is_duplicate_of(&self, other: &Person) -> bool {
        self == other || self.email == other.email
    }

    /// One-line summary used in command feedback.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Type: {}; Name: {}; Phone: {}; Email: {}",
            self.person_type, self.name, self.phone, self.email
        );
        if let Some(telegram) = &self.telegram {
            out.push_str(&format!("; Telegram: {telegram}"));
        }
        if let Some(session) = &self.session {
            out.push_str(&format!("; Session: {session}"));
        }
        out
    }
}
