//! Email address value object.
//!
//! Enforcement (pragmatic, user-friendly subset of RFC rules):
//! - Structure: exactly one '@', no spaces.
//! - Lengths: total <= 254 chars; local-part <= 64; each domain label <= 63.
//! - Local-part: alphanumeric runs with [., _, +, -] as single separators;
//!   cannot start/end with a separator; no consecutive separators.
//! - Domain: labels separated by dots; each starts/ends alphanumeric, hyphens
//!   allowed inside; at least one dot; TLD >= 2 alphanumeric chars.
//! - Case: domain is case-insensitive and normalized to lowercase on store;
//!   local-part preserved as entered.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidEmail};

const MAX_TOTAL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Email address, stored with the domain part lowercased.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and validate an email string, normalizing the domain to lowercase.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if !Self::is_valid(&s) {
            return Err(InvalidEmail { raw: s }.into());
        }
        let at = s.find('@').expect("validated email has an '@'");
        let (local, domain) = (&s[..at], &s[at + 1..]);
        Ok(Self(format!("{local}@{}", domain.to_ascii_lowercase())))
    }

    /// Returns true if the given string is a valid email address.
    pub fn is_valid(s: &str) -> bool {
        if s.len() > MAX_TOTAL_LEN {
            return false;
        }
        let mut parts = s.splitn(2, '@');
        let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }
        is_valid_local(local) && is_valid_domain(domain)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_local(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    let bytes = local.as_bytes();
    if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
        return false;
    }
    let mut prev_was_separator = false;
    for &b in bytes {
        if b.is_ascii_alphanumeric() {
            prev_was_separator = false;
        } else if matches!(b, b'.' | b'_' | b'+' | b'-') {
            if prev_was_separator {
                return false;
            }
            prev_was_separator = true;
        } else {
            return false;
        }
    }
    true
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    for label in &labels {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return false;
        }
        let bytes = label.as_bytes();
        if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
            return false;
        }
        if !bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-') {
            return false;
        }
    }
    // Final label is the TLD: >= 2 chars, no hyphens.
    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({:?})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Email::parse(s)
    }
}

impl From<Email> for String {
    fn from(e: Email) -> String {
        e.0
    }
}
