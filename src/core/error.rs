//! Core domain errors (field validation).
//!
//! These are bounded and stable: each variant is a constraint violation for
//! one of the person field value objects, and its message spells out the
//! accepted grammar so it can be shown to the user verbatim.

use thiserror::Error;

/// Invalid person name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Names can contain letters, spaces, apostrophes (' or \u{2019}), hyphens (-),\n\
     periods (.), and slashes (/). They must not be blank and must be at most \
     500 characters."
)]
pub struct InvalidName {
    pub raw: String,
}

/// Invalid phone number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Phone numbers can contain only digits, and must be at least 3 digits long.")]
pub struct InvalidPhone {
    pub raw: String,
}

/// Invalid email address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Emails must be of the form local-part@domain and adhere to:\n\
     1) exactly one '@', no spaces; 2) total length \u{2264} 254;\n\
     3) local-part \u{2264} 64 using [A-Za-z0-9] with [._+-] as separators \
     (no leading/trailing separator, no consecutive separators);\n\
     4) domain contains at least one '.', labels start/end alphanumeric, hyphens allowed inside, \
     final label (TLD) \u{2265} 2 chars;\n\
     5) domain is case-insensitive (stored lowercased)."
)]
pub struct InvalidEmail {
    pub raw: String,
}

/// Invalid class session identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", super::session::Session::MESSAGE_CONSTRAINTS)]
pub struct InvalidSession {
    pub raw: String,
}

/// Invalid telegram handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Telegram handles start with '@', followed by 5\u{2013}32 letters, digits or \
     underscores, the first of which must be a letter (e.g., @amyBee_01)."
)]
pub struct InvalidTelegram {
    pub raw: String,
}

/// Invalid person type word.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Type must be one of: student, ta, instructor, staff.")]
pub struct InvalidPersonType {
    pub raw: String,
}

/// Canonical error enum for the core domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
    #[error(transparent)]
    InvalidPhone(#[from] InvalidPhone),
    #[error(transparent)]
    InvalidEmail(#[from] InvalidEmail),
    #[error(transparent)]
    InvalidSession(#[from] InvalidSession),
    #[error(transparent)]
    InvalidTelegram(#[from] InvalidTelegram),
    #[error(transparent)]
    InvalidPersonType(#[from] InvalidPersonType),
}
