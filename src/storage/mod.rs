//! JSON persistence for the contact store.
//!
//! The executor treats saving as synchronous and best-effort: a failed save
//! surfaces an error but never rolls back the in-memory mutation. Loading
//! re-validates every field and re-checks the store invariants, so a
//! hand-edited data file cannot smuggle in constraint violations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::limits::{MAX_PERSON_COUNT, MAX_SESSION_COUNT};
use crate::core::{
    ContactStore, CoreError, Email, Name, Person, PersonType, Phone, Session, TelegramHandle,
};

/// Persistence collaborator consumed by the executor.
pub trait ContactStorage {
    /// Load the stored contacts; a missing file is an empty store.
    fn load(&self) -> Result<ContactStore, StorageError>;

    /// Persist the full store.
    fn save(&self, store: &ContactStore) -> Result<(), StorageError>;
}

/// Persistence failures, with permission-denied as its own kind so the
/// executor can surface a more actionable message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("Could not save data due to the following error: {source}")]
    Io {
        #[source]
        source: io::Error,
    },

    #[error(
        "Could not save data to file {path} due to insufficient permissions \
         to write to the file or the folder."
    )]
    PermissionDenied { path: String },

    #[error("Could not read data from {path}: {reason}")]
    Malformed { path: String, reason: String },
}

/// JSON-file-backed storage.
pub struct JsonContactStorage {
    path: PathBuf,
}

impl JsonContactStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error_for(&self, source: io::Error) -> StorageError {
        if source.kind() == io::ErrorKind::PermissionDenied {
            StorageError::PermissionDenied {
                path: self.path.display().to_string(),
            }
        } else {
            StorageError::Io { source }
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> StorageError {
        StorageError::Malformed {
            path: self.path.display().to_string(),
            reason: reason.into(),
        }
    }
}

impl ContactStorage for JsonContactStorage {
    fn load(&self) -> Result<ContactStore, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file, starting empty");
                return Ok(ContactStore::new());
            }
            Err(err) => return Err(self.error_for(err)),
        };

        let stored: StoredContacts =
            serde_json::from_str(&contents).map_err(|err| self.malformed(err.to_string()))?;
        let store = stored
            .into_store()
            .map_err(|reason| self.malformed(reason))?;
        debug!(path = %self.path.display(), persons = store.len(), "data file loaded");
        Ok(store)
    }

    fn save(&self, store: &ContactStore) -> Result<(), StorageError> {
        let stored = StoredContacts::from_store(store);
        let json = serde_json::to_string_pretty(&stored).expect("contact store serializes");

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| self.error_for(err))?;
        }

        // Write to a sibling temp file, then rename over the target, so an
        // interrupted save never truncates the existing data file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|err| self.error_for(err))?;
        fs::rename(&tmp, &self.path).map_err(|err| self.error_for(err))?;
        debug!(path = %self.path.display(), persons = store.len(), "data file saved");
        Ok(())
    }
}

// =============================================================================
// On-disk shape
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct StoredContacts {
    persons: Vec<StoredPerson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPerson {
    name: String,
    phone: String,
    email: String,
    #[serde(rename = "type")]
    person_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    session: Option<String>,
}

impl StoredContacts {
    fn from_store(store: &ContactStore) -> Self {
        Self {
            persons: store
                .persons()
                .iter()
                .map(|p| StoredPerson {
                    name: p.name.to_string(),
                    phone: p.phone.to_string(),
                    email: p.email.to_string(),
                    person_type: p.person_type.as_str().to_string(),
                    telegram: p.telegram.as_ref().map(ToString::to_string),
                    session: p.session.as_ref().map(ToString::to_string),
                })
                .collect(),
        }
    }

    fn into_store(self) -> Result<ContactStore, String> {
        let mut store = ContactStore::new();
        for stored in self.persons {
            let person = stored.into_person().map_err(|err| err.to_string())?;
            if store.contains_duplicate(&person) {
                return Err("Persons list contains duplicate person(s).".to_string());
            }
            let counter = store.counter();
            if counter.person_count_if_added() > MAX_PERSON_COUNT {
                return Err(format!(
                    "Persons list contains more than maximum {MAX_PERSON_COUNT} person limit."
                ));
            }
            if let Some(session) = &person.session
                && counter.unique_session_count_if_added(session) > MAX_SESSION_COUNT
            {
                return Err(format!(
                    "Persons list contains more than maximum {MAX_SESSION_COUNT} session limit."
                ));
            }
            store.add(person);
        }
        Ok(store)
    }
}

impl StoredPerson {
    fn into_person(self) -> Result<Person, CoreError> {
        Ok(Person::new(
            Name::parse(self.name)?,
            Phone::parse(self.phone)?,
            Email::parse(self.email)?,
            PersonType::parse(&self.person_type)?,
            self.telegram.map(TelegramHandle::parse).transpose()?,
            self.session.map(Session::parse).transpose()?,
        ))
    }
}
